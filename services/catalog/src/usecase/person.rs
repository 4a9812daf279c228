use crate::domain::repository::PersonRepository;
use crate::domain::types::{NewPerson, Person, PersonChanges};
use crate::error::CatalogServiceError;

// ── ListPeople ───────────────────────────────────────────────────────────────

pub struct ListPeopleUseCase<R: PersonRepository> {
    pub repo: R,
}

impl<R: PersonRepository> ListPeopleUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Person>, CatalogServiceError> {
        self.repo.list().await
    }
}

// ── GetPerson ────────────────────────────────────────────────────────────────

pub struct GetPersonUseCase<R: PersonRepository> {
    pub repo: R,
}

impl<R: PersonRepository> GetPersonUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<Person, CatalogServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CatalogServiceError::PersonNotFound)
    }
}

// ── CreatePerson ─────────────────────────────────────────────────────────────

pub struct CreatePersonUseCase<R: PersonRepository> {
    pub repo: R,
}

impl<R: PersonRepository> CreatePersonUseCase<R> {
    pub async fn execute(&self, input: NewPerson) -> Result<Person, CatalogServiceError> {
        input.validate()?;
        let person = self.repo.create(&input).await?;
        tracing::info!(person_id = person.id, "person created");
        Ok(person)
    }
}

// ── UpdatePerson ─────────────────────────────────────────────────────────────

pub struct UpdatePersonUseCase<R: PersonRepository> {
    pub repo: R,
}

impl<R: PersonRepository> UpdatePersonUseCase<R> {
    pub async fn execute(
        &self,
        id: i32,
        changes: PersonChanges,
    ) -> Result<Person, CatalogServiceError> {
        changes.validate()?;
        self.repo
            .update(id, &changes)
            .await?
            .ok_or(CatalogServiceError::PersonNotFound)
    }
}

// ── DeletePerson ─────────────────────────────────────────────────────────────

pub struct DeletePersonUseCase<R: PersonRepository> {
    pub repo: R,
}

impl<R: PersonRepository> DeletePersonUseCase<R> {
    pub async fn execute(&self, id: i32) -> Result<(), CatalogServiceError> {
        let deleted = self.repo.delete(id).await?;
        if !deleted {
            return Err(CatalogServiceError::PersonNotFound);
        }
        tracing::info!(person_id = id, "person deleted");
        Ok(())
    }
}
