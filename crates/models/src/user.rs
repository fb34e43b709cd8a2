use serde::{Deserialize, Serialize};

use crate::{id::RecordId, resource::Resource};

/// Stored user fields. `email` is kept as given; no format check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBase {
    pub username: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
}

impl From<UserCreate> for UserBase {
    fn from(c: UserCreate) -> Self {
        Self { username: c.username, email: c.email }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: RecordId,
    pub username: String,
    pub email: String,
}

impl Resource for User {
    type Base = UserBase;
    type Create = UserCreate;

    const NAME: &'static str = "User";
    const COLLECTION: &'static str = "users";
    const DATABASE: &'static str = "user_database";

    fn from_stored(id: RecordId, base: UserBase) -> Self {
        Self { id, username: base.username, email: base.email }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn base(&self) -> UserBase {
        UserBase { username: self.username.clone(), email: self.email.clone() }
    }
}
