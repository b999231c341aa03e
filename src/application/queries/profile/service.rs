use std::sync::Arc;

use crate::domain::user::UserRepository;

pub struct ProfileQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ProfileQueryService {
    #[must_use]
    pub const fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}
