//! People catalog operations and the friendship graph surface.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult, EntityKind};
use crate::model::person::{self, CreatePerson, Person, PersonDraft, UpdatePerson};
use crate::storage::{FriendshipStore, PersonStore};
use crate::types::DbId;

/// Person CRUD plus friendship operations, with existence checks before
/// every mutation.
pub struct PeopleService {
    people: Arc<dyn PersonStore>,
    friendships: Arc<dyn FriendshipStore>,
}

impl PeopleService {
    pub fn new(people: Arc<dyn PersonStore>, friendships: Arc<dyn FriendshipStore>) -> Self {
        Self {
            people,
            friendships,
        }
    }

    pub async fn all(&self) -> CoreResult<Vec<Person>> {
        self.people.all().await
    }

    pub async fn get(&self, id: DbId) -> CoreResult<Person> {
        self.people
            .get(id)
            .await?
            .ok_or(CoreError::not_found(EntityKind::Person, id))
    }

    pub async fn create(&self, input: CreatePerson) -> CoreResult<Person> {
        person::validate_person_fields(&input.email, &input.login, input.birthday)?;

        let name = person::effective_name(input.name.as_deref(), &input.login);
        let person = self
            .people
            .create(PersonDraft {
                email: input.email,
                login: input.login,
                name,
                birthday: input.birthday,
            })
            .await?;

        tracing::info!(person_id = person.id, "Person created");
        Ok(person)
    }

    pub async fn update(&self, id: DbId, input: UpdatePerson) -> CoreResult<Person> {
        let current = self.get(id).await?;

        let email = input.email.unwrap_or(current.email);
        let login = input.login.unwrap_or(current.login);
        let name = match input.name {
            Some(name) => person::effective_name(Some(&name), &login),
            None => current.name,
        };
        let birthday = input.birthday.unwrap_or(current.birthday);

        person::validate_person_fields(&email, &login, birthday)?;

        let updated = self
            .people
            .update(Person {
                id,
                email,
                login,
                name,
                birthday,
            })
            .await?
            .ok_or(CoreError::not_found(EntityKind::Person, id))?;

        tracing::info!(person_id = id, "Person updated");
        Ok(updated)
    }

    /// Delete a person. The store cascades friendship and like edges in
    /// the same commit.
    pub async fn delete(&self, id: DbId) -> CoreResult<()> {
        if !self.people.delete(id).await? {
            return Err(CoreError::not_found(EntityKind::Person, id));
        }
        tracing::info!(person_id = id, "Person deleted");
        Ok(())
    }

    /// Record the mutual friendship `{id, friend_id}`.
    pub async fn add_friend(&self, id: DbId, friend_id: DbId) -> CoreResult<()> {
        if id == friend_id {
            tracing::warn!(person_id = id, "Attempt to befriend self");
            return Err(CoreError::InvalidArgument(
                "A person cannot befriend themselves".into(),
            ));
        }
        self.ensure_person(id).await?;
        self.ensure_person(friend_id).await?;

        self.friendships.add(id, friend_id).await?;
        tracing::info!(person_id = id, friend_id, "Friendship created");
        Ok(())
    }

    /// Dissolve the friendship if present. Not being friends is a benign
    /// terminal state, not a failure; only missing people are errors.
    pub async fn remove_friend(&self, id: DbId, friend_id: DbId) -> CoreResult<()> {
        self.ensure_person(id).await?;
        self.ensure_person(friend_id).await?;

        let removed = self.friendships.remove(id, friend_id).await?;
        if removed {
            tracing::info!(person_id = id, friend_id, "Friendship removed");
        } else {
            tracing::debug!(person_id = id, friend_id, "No friendship to remove");
        }
        Ok(())
    }

    /// All friends of `id`, hydrated, ascending by id.
    pub async fn friends(&self, id: DbId) -> CoreResult<Vec<Person>> {
        self.ensure_person(id).await?;
        let ids = self.friendships.friends_of(id).await?;
        self.people.get_many(&ids).await
    }

    /// Friends shared by `id` and `other_id`, hydrated, ascending by id.
    pub async fn common_friends(&self, id: DbId, other_id: DbId) -> CoreResult<Vec<Person>> {
        self.ensure_person(id).await?;
        self.ensure_person(other_id).await?;
        let ids = self.friendships.common_friends(id, other_id).await?;
        self.people.get_many(&ids).await
    }

    async fn ensure_person(&self, id: DbId) -> CoreResult<()> {
        if self.people.exists(id).await? {
            Ok(())
        } else {
            Err(CoreError::not_found(EntityKind::Person, id))
        }
    }
}
