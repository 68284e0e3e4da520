//! Document-backed attendance store.
//!
//! The whole tree lives in one persisted document. In memory it is split
//! into an arena of per-professor locks so that check-ins for different
//! professors never wait on each other except for the final save.
//!
//! Lock order is always professor, then document.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::attendance::{AttendanceDocument, AttendanceError, Class, NewClass, Professor, Session};
use crate::domain::auth::{AuthError, UserAccount};
use crate::domain::foundation::{ClassId, ProfessorId, SessionNumber, UserId};
use crate::ports::{AttendanceStore, CredentialStore, DocumentStorage, StorageError};

/// Attendance store over a [`DocumentStorage`].
///
/// Each mutation runs against a clone of the professor, is written into
/// the document and saved, and only then replaces the live professor. A
/// failed save restores the document entry, and a started commit always
/// runs to completion, so live state and storage never diverge.
pub struct DocumentAttendanceStore {
    storage: Arc<dyn DocumentStorage>,
    professors: BTreeMap<ProfessorId, Arc<Mutex<Professor>>>,
    document: Arc<Mutex<AttendanceDocument>>,
}

impl DocumentAttendanceStore {
    /// Loads the document and builds the professor arena.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document cannot be loaded or has
    /// duplicate ids.
    pub async fn load(storage: Arc<dyn DocumentStorage>) -> Result<Self, StorageError> {
        let document = storage.load().await?;
        document
            .validate()
            .map_err(|e| StorageError::InvalidDocument(e.to_string()))?;

        let professors = document
            .professors
            .iter()
            .map(|p| (p.id(), Arc::new(Mutex::new(p.clone()))))
            .collect::<BTreeMap<_, _>>();

        tracing::info!(
            professors = professors.len(),
            users = document.users.len(),
            "attendance document loaded"
        );

        Ok(Self {
            storage,
            professors,
            document: Arc::new(Mutex::new(document)),
        })
    }

    fn slot(&self, professor_id: ProfessorId) -> Result<&Arc<Mutex<Professor>>, AttendanceError> {
        self.professors
            .get(&professor_id)
            .ok_or_else(|| AttendanceError::professor_not_found(professor_id))
    }

    async fn read<T, F>(&self, professor_id: ProfessorId, f: F) -> Result<T, AttendanceError>
    where
        F: FnOnce(&Professor) -> Result<T, AttendanceError> + Send,
    {
        let professor = self.slot(professor_id)?.lock().await;
        f(&professor)
    }

    /// Applies `f` to a draft of the professor and commits it if `f`
    /// reports a change.
    ///
    /// The commit runs on its own task holding the professor lock, so a
    /// caller that is dropped mid-save (request timeout, disconnect) cannot
    /// leave the document and the live professor out of step.
    async fn mutate<T, F>(&self, professor_id: ProfessorId, f: F) -> Result<T, AttendanceError>
    where
        T: Send,
        F: FnOnce(&mut Professor) -> Result<(T, bool), AttendanceError> + Send,
    {
        let mut professor = Arc::clone(self.slot(professor_id)?).lock_owned().await;
        let mut draft = professor.clone();
        let (output, changed) = f(&mut draft)?;
        if changed {
            let storage = Arc::clone(&self.storage);
            let document = Arc::clone(&self.document);
            tokio::spawn(async move {
                commit(storage.as_ref(), &document, &draft).await?;
                *professor = draft;
                Ok::<_, AttendanceError>(())
            })
            .await
            .map_err(|e| AttendanceError::storage(format!("commit task failed: {e}")))??;
        }
        Ok(output)
    }
}

/// Writes `professor` into the document and saves it, restoring the
/// previous entry if the save fails.
async fn commit(
    storage: &dyn DocumentStorage,
    document: &Mutex<AttendanceDocument>,
    professor: &Professor,
) -> Result<(), AttendanceError> {
    let mut document = document.lock().await;
    let index = document
        .professors
        .iter()
        .position(|p| p.id() == professor.id())
        .ok_or_else(|| AttendanceError::professor_not_found(professor.id()))?;

    let previous = std::mem::replace(&mut document.professors[index], professor.clone());
    if let Err(err) = storage.save(&document).await {
        document.professors[index] = previous;
        tracing::error!(professor_id = %professor.id(), error = %err, "failed to persist attendance document");
        return Err(err.into());
    }
    Ok(())
}

#[async_trait]
impl AttendanceStore for DocumentAttendanceStore {
    async fn list_professors(&self) -> Result<Vec<Professor>, AttendanceError> {
        let mut professors = Vec::with_capacity(self.professors.len());
        for slot in self.professors.values() {
            professors.push(slot.lock().await.clone());
        }
        Ok(professors)
    }

    async fn get_professor(&self, professor_id: ProfessorId) -> Result<Professor, AttendanceError> {
        self.read(professor_id, |p| Ok(p.clone())).await
    }

    async fn find_professor_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<Professor>, AttendanceError> {
        for slot in self.professors.values() {
            let professor = slot.lock().await;
            if professor.user_id() == user_id {
                return Ok(Some(professor.clone()));
            }
        }
        Ok(None)
    }

    async fn get_classes_for_professor(
        &self,
        professor_id: ProfessorId,
    ) -> Result<Vec<Class>, AttendanceError> {
        self.read(professor_id, |p| Ok(p.classes().to_vec())).await
    }

    async fn add_class(
        &self,
        professor_id: ProfessorId,
        data: NewClass,
    ) -> Result<Class, AttendanceError> {
        let class = self
            .mutate(professor_id, |p| Ok((p.add_class(data)?.clone(), true)))
            .await?;
        tracing::info!(professor_id = %professor_id, class_id = %class.id(), "class created");
        Ok(class)
    }

    async fn remove_class(
        &self,
        professor_id: ProfessorId,
        class_id: ClassId,
    ) -> Result<(), AttendanceError> {
        self.mutate(professor_id, |p| p.remove_class(class_id).map(|_| ((), true)))
            .await?;
        tracing::info!(professor_id = %professor_id, class_id = %class_id, "class removed");
        Ok(())
    }

    async fn get_session(
        &self,
        professor_id: ProfessorId,
        class_id: ClassId,
        session_number: SessionNumber,
    ) -> Result<Session, AttendanceError> {
        self.read(professor_id, |p| p.session(class_id, session_number).cloned())
            .await
    }

    async fn add_attendee(
        &self,
        professor_id: ProfessorId,
        class_id: ClassId,
        session_number: SessionNumber,
        name: &str,
    ) -> Result<(), AttendanceError> {
        let added = self
            .mutate(professor_id, |p| {
                let added = p.add_attendee(class_id, session_number, name)?;
                Ok((added, added))
            })
            .await?;
        tracing::debug!(
            professor_id = %professor_id,
            class_id = %class_id,
            session_number = %session_number,
            added,
            "attendee recorded"
        );
        Ok(())
    }

    async fn remove_attendee(
        &self,
        professor_id: ProfessorId,
        class_id: ClassId,
        session_number: SessionNumber,
        name: &str,
    ) -> Result<(), AttendanceError> {
        let removed = self
            .mutate(professor_id, |p| {
                let removed = p.remove_attendee(class_id, session_number, name)?;
                Ok((removed, removed))
            })
            .await?;
        tracing::debug!(
            professor_id = %professor_id,
            class_id = %class_id,
            session_number = %session_number,
            removed,
            "attendee removed"
        );
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for DocumentAttendanceStore {
    async fn verify(&self, username: &str, password: &str) -> Result<UserAccount, AuthError> {
        let document = self.document.lock().await;
        document
            .users
            .iter()
            .find(|u| u.username == username)
            .filter(|u| u.password_matches(password))
            .map(|u| u.account())
            .ok_or(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDocumentStorage;
    use crate::domain::auth::{Role, UserRecord};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    /// Delegates to in-memory storage, stalling the first save.
    struct StallingStorage {
        inner: InMemoryDocumentStorage,
        stalled: AtomicBool,
    }

    #[async_trait]
    impl DocumentStorage for StallingStorage {
        async fn load(&self) -> Result<AttendanceDocument, StorageError> {
            self.inner.load().await
        }

        async fn save(&self, document: &AttendanceDocument) -> Result<(), StorageError> {
            if !self.stalled.swap(true, Ordering::SeqCst) {
                tokio::time::sleep(Duration::from_millis(300)).await;
            }
            self.inner.save(document).await
        }
    }

    fn seed() -> AttendanceDocument {
        let class = Class::new(
            ClassId::new(1),
            NewClass::new("Algorithms", Some("CS 3310"), None, Some("Fall 2025")).unwrap(),
        )
        .with_session(Session::new(SessionNumber::new(1), "2025-11-20"));
        AttendanceDocument {
            users: vec![
                UserRecord::new(UserId::new(1), "student", "pw", Role::Student),
                UserRecord::new(UserId::new(3), "harsch", "pw", Role::Professor),
            ],
            professors: vec![
                Professor::new(ProfessorId::new(3), "Dr. Harsch", UserId::new(3)).with_class(class),
                Professor::new(ProfessorId::new(4), "Dr. Lopez", UserId::new(4)),
            ],
        }
    }

    async fn store() -> (DocumentAttendanceStore, InMemoryDocumentStorage) {
        let storage = InMemoryDocumentStorage::with_document(&seed()).unwrap();
        let store = DocumentAttendanceStore::load(Arc::new(storage.clone()))
            .await
            .unwrap();
        (store, storage)
    }

    const P3: ProfessorId = ProfessorId::new(3);
    const C1: ClassId = ClassId::new(1);
    const S1: SessionNumber = SessionNumber::new(1);

    #[tokio::test]
    async fn add_attendee_persists_and_is_visible() {
        let (store, storage) = store().await;
        store.add_attendee(P3, C1, S1, "Jane Doe").await.unwrap();

        let session = store.get_session(P3, C1, S1).await.unwrap();
        assert_eq!(session.attendees(), &["Jane Doe".to_string()]);

        let persisted = storage.load().await.unwrap();
        assert!(persisted.professors[0]
            .session(C1, S1)
            .unwrap()
            .has_attendee("Jane Doe"));
    }

    #[tokio::test]
    async fn duplicate_add_and_absent_remove_skip_save() {
        let (store, storage) = store().await;
        store.add_attendee(P3, C1, S1, "Jane Doe").await.unwrap();
        assert_eq!(storage.save_count(), 1);

        store.add_attendee(P3, C1, S1, "Jane Doe").await.unwrap();
        store.remove_attendee(P3, C1, S1, "Nobody").await.unwrap();
        assert_eq!(storage.save_count(), 1);
        assert_eq!(store.get_session(P3, C1, S1).await.unwrap().attendees().len(), 1);
    }

    #[tokio::test]
    async fn not_found_is_most_specific() {
        let (store, _) = store().await;
        assert_eq!(
            store.get_session(ProfessorId::new(99999), C1, S1).await.unwrap_err(),
            AttendanceError::professor_not_found(ProfessorId::new(99999))
        );
        assert_eq!(
            store.get_session(P3, ClassId::new(9), S1).await.unwrap_err(),
            AttendanceError::class_not_found(P3, ClassId::new(9))
        );
        assert_eq!(
            store.add_attendee(P3, C1, SessionNumber::new(9), "Jane Doe").await.unwrap_err(),
            AttendanceError::session_not_found(P3, C1, SessionNumber::new(9))
        );
    }

    #[tokio::test]
    async fn failed_save_leaves_state_unchanged() {
        let (store, storage) = store().await;
        let before = storage.snapshot().await;
        storage.fail_saves(true);

        let err = store.add_attendee(P3, C1, S1, "Jane Doe").await.unwrap_err();
        assert!(matches!(err, AttendanceError::Storage(_)));
        assert!(store.get_session(P3, C1, S1).await.unwrap().attendees().is_empty());
        assert_eq!(storage.snapshot().await, before);

        storage.fail_saves(false);
        store.add_class(ProfessorId::new(4), NewClass::new("Databases", None, None, None).unwrap())
            .await
            .unwrap();
        let persisted = storage.load().await.unwrap();
        assert!(persisted.professors[0].session(C1, S1).unwrap().attendees().is_empty());
    }

    #[tokio::test]
    async fn add_class_assigns_next_id_and_remove_deletes_it() {
        let (store, _) = store().await;
        let class = store
            .add_class(P3, NewClass::new("Compilers", None, Some(2), None).unwrap())
            .await
            .unwrap();
        assert_eq!(class.id(), ClassId::new(2));
        assert_eq!(class.section(), 2);

        store.remove_class(P3, class.id()).await.unwrap();
        assert_eq!(
            store.remove_class(P3, class.id()).await.unwrap_err(),
            AttendanceError::class_not_found(P3, class.id())
        );
        assert_eq!(store.get_classes_for_professor(P3).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn first_class_for_professor_without_classes_is_one() {
        let (store, _) = store().await;
        let class = store
            .add_class(ProfessorId::new(4), NewClass::new("Databases", None, None, None).unwrap())
            .await
            .unwrap();
        assert_eq!(class.id(), ClassId::new(1));
    }

    #[tokio::test]
    async fn concurrent_check_ins_are_all_recorded() {
        let (store, storage) = store().await;
        let store = Arc::new(store);

        let tasks = (0..50)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .add_attendee(P3, C1, S1, &format!("Student {i}"))
                        .await
                })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let session = store.get_session(P3, C1, S1).await.unwrap();
        assert_eq!(session.attendees().len(), 50);
        let persisted = storage.load().await.unwrap();
        assert_eq!(persisted.professors[0].session(C1, S1).unwrap().attendees().len(), 50);
    }

    #[tokio::test]
    async fn writes_to_different_professors_are_both_persisted() {
        let (store, storage) = store().await;
        let store = Arc::new(store);

        let a = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.add_attendee(P3, C1, S1, "Jane Doe").await })
        };
        let b = {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .add_class(ProfessorId::new(4), NewClass::new("Databases", None, None, None).unwrap())
                    .await
            })
        };
        a.await.unwrap().unwrap();
        b.await.unwrap().unwrap();

        let persisted = storage.load().await.unwrap();
        assert!(persisted.professors[0].session(C1, S1).unwrap().has_attendee("Jane Doe"));
        assert_eq!(persisted.professors[1].classes().len(), 1);
    }

    #[tokio::test]
    async fn find_professor_by_user_and_list() {
        let (store, _) = store().await;
        let professor = store.find_professor_by_user(UserId::new(3)).await.unwrap().unwrap();
        assert_eq!(professor.id(), P3);
        assert!(store.find_professor_by_user(UserId::new(1)).await.unwrap().is_none());

        let ids = store
            .list_professors()
            .await
            .unwrap()
            .iter()
            .map(Professor::id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![P3, ProfessorId::new(4)]);
    }

    #[tokio::test]
    async fn verify_credentials() {
        let (store, _) = store().await;
        let account = store.verify("harsch", "pw").await.unwrap();
        assert_eq!(account.role, Role::Professor);
        assert_eq!(store.verify("harsch", "nope").await.unwrap_err(), AuthError::InvalidCredentials);
        assert_eq!(store.verify("ghost", "pw").await.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[tokio::test]
    async fn dropped_caller_does_not_split_memory_from_storage() {
        let inner = InMemoryDocumentStorage::with_document(&seed()).unwrap();
        let storage = StallingStorage {
            inner: inner.clone(),
            stalled: AtomicBool::new(false),
        };
        let store = DocumentAttendanceStore::load(Arc::new(storage)).await.unwrap();

        let result = tokio::time::timeout(
            Duration::from_millis(50),
            store.add_attendee(P3, C1, S1, "Jane Doe"),
        )
        .await;
        assert!(result.is_err());

        store
            .add_class(ProfessorId::new(4), NewClass::new("Databases", None, None, None).unwrap())
            .await
            .unwrap();

        let live = store.get_session(P3, C1, S1).await.unwrap();
        assert_eq!(live.attendees(), &["Jane Doe".to_string()]);

        let persisted = inner.load().await.unwrap();
        assert_eq!(
            persisted.professors[0].session(C1, S1).unwrap().attendees(),
            live.attendees()
        );
        assert_eq!(persisted.professors[1].classes().len(), 1);
    }

    #[tokio::test]
    async fn exhausted_class_ids_are_rejected_without_saving() {
        let mut document = seed();
        document.professors[1] = Professor::new(ProfessorId::new(4), "Dr. Lopez", UserId::new(4))
            .with_class(Class::new(
                ClassId::new(u32::MAX),
                NewClass::new("Databases", None, None, None).unwrap(),
            ));
        let storage = InMemoryDocumentStorage::with_document(&document).unwrap();
        let store = DocumentAttendanceStore::load(Arc::new(storage.clone()))
            .await
            .unwrap();

        let err = store
            .add_class(ProfessorId::new(4), NewClass::new("Compilers", None, None, None).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, AttendanceError::InvalidArgument { .. }));
        assert_eq!(storage.save_count(), 0);
        assert_eq!(
            store.get_classes_for_professor(ProfessorId::new(4)).await.unwrap().len(),
            1
        );
    }
}
