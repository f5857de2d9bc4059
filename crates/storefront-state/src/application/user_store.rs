use storefront_types::domain::user::User;

/// The signed-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    user: Option<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn clear_user(&mut self) {
        self.user = None;
    }
}
