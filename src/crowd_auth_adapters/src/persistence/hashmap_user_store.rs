use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use chrono::Utc;
use crowd_auth_core::{LocalUser, NewLocalUser, UserId, UserStore, UserStoreError, Username};

#[derive(Default)]
struct Users {
    by_username: HashMap<Username, LocalUser>,
    usernames: HashMap<UserId, Username>,
}

impl Users {
    fn insert(&mut self, user: LocalUser) {
        self.usernames.insert(user.id, user.username.clone());
        self.by_username.insert(user.username.clone(), user);
    }
}

#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<Users>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Users::default())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<LocalUser>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users.by_username.get(username).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<LocalUser>, UserStoreError> {
        let users = self.users.read().await;
        Ok(users
            .usernames
            .get(id)
            .and_then(|username| users.by_username.get(username))
            .cloned())
    }

    async fn create(&self, user: NewLocalUser) -> Result<LocalUser, UserStoreError> {
        let mut users = self.users.write().await;
        if users.by_username.contains_key(&user.username) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let user = user.into_local_user(UserId::new(), Utc::now());
        users.insert(user.clone());
        Ok(user)
    }

    async fn save(&self, user: LocalUser) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if let Some(owner) = users.by_username.get(&user.username) {
            if owner.id != user.id {
                return Err(UserStoreError::UserAlreadyExists);
            }
        }
        // A renamed user leaves its old username behind
        if let Some(previous) = users.usernames.get(&user.id).cloned() {
            users.by_username.remove(&previous);
        }
        users.insert(user);
        Ok(())
    }
}
