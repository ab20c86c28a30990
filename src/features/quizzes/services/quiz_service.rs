use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::core::error::{Result, StoreResultExt};
use crate::features::questions::dtos::QuestionResponseDto;
use crate::features::questions::models::Question;
use crate::modules::store::TriviaStore;
use crate::shared::constants::ALL_CATEGORIES;

/// Service that draws quiz questions
pub struct QuizService {
    store: Arc<dyn TriviaStore>,
    rng: Mutex<StdRng>,
}

impl QuizService {
    /// Draws are seeded from the operating system
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self::with_rng(store, StdRng::from_os_rng())
    }

    /// Reproducible draws for a given seed
    pub fn with_seed(store: Arc<dyn TriviaStore>, seed: u64) -> Self {
        Self::with_rng(store, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(store: Arc<dyn TriviaStore>, rng: StdRng) -> Self {
        Self {
            store,
            rng: Mutex::new(rng),
        }
    }

    /// Pick a random question the player has not seen yet.
    ///
    /// `category_id` of [`ALL_CATEGORIES`] draws from every category.
    /// Returns `None` once every candidate is in `previous_questions`.
    pub async fn next_question(
        &self,
        previous_questions: &[i32],
        category_id: i32,
    ) -> Result<Option<QuestionResponseDto>> {
        let mut tx = self
            .store
            .begin()
            .await
            .or_unprocessable("Failed to open transaction")?;
        let candidates = if category_id == ALL_CATEGORIES {
            tx.questions().await
        } else {
            tx.questions_in_category(category_id).await
        }
        .or_unprocessable("Failed to load quiz candidates")?;
        tx.commit()
            .await
            .or_unprocessable("Failed to commit transaction")?;

        let seen: HashSet<i32> = previous_questions.iter().copied().collect();
        let picked = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            pick_unseen(candidates, &seen, &mut *rng)
        };

        tracing::debug!(
            "Quiz draw: category={}, seen={}, picked={:?}",
            category_id,
            seen.len(),
            picked.as_ref().map(|q| q.id)
        );

        Ok(picked.map(|q| q.into()))
    }
}

/// Shuffle the candidates and return the first one not in `seen`
fn pick_unseen<R>(
    mut candidates: Vec<Question>,
    seen: &HashSet<i32>,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    candidates.shuffle(rng);
    candidates.into_iter().find(|q| !seen.contains(&q.id))
}
