use crate::lookup::HolidayService;
use crate::validation::RequestValidator;

use std::sync::Arc;

/// Shared, read-only handles given to every request.
#[derive(Clone)]
pub struct ApiState {
    pub(crate) validator: RequestValidator,
    pub(crate) service: Arc<HolidayService>,
}

impl ApiState {
    pub fn new(service: HolidayService) -> Self {
        Self {
            validator: RequestValidator::default(),
            service: Arc::new(service),
        }
    }
}
