mod category;

pub use category::{category_map, Category};
