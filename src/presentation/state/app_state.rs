use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::{AugmentationService, ExtractionService};

pub struct AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub extraction_service: Arc<ExtractionService<F>>,
    pub augmentation_service: Arc<AugmentationService<L>>,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
            augmentation_service: Arc::clone(&self.augmentation_service),
        }
    }
}
