use std::fmt::Display;

use uuid::Uuid;

#[derive(Clone, Debug)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
        }
    }

    pub fn new_with_id(id: Uuid, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
