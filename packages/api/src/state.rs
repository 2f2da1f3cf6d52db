use std::sync::Arc;

use shared::services::auth_service::AuthService;
use shared::services::move_service::MoveService;
use shared::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub move_service: Arc<MoveService>,
    pub user_service: Arc<UserService>,
    pub auth_service: Arc<AuthService>,
}
