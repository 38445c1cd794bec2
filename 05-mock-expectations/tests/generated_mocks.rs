// The same discipline with a mockall-generated mock of the identical trait,
// for comparison with the hand-built engine.

use mockall::mock;
use mockall::predicate::eq;
use mockall::Sequence;
use userstore::{RepoError, User, UserRepository, UserService};

mock! {
    pub Repo {}

    impl UserRepository for Repo {
        fn fetch(&self, id: i64) -> Result<User, RepoError>;
        fn save(&self, user: User) -> Result<User, RepoError>;
        fn delete(&self, id: i64) -> Result<(), RepoError>;
        fn list_all(&self) -> Result<Vec<User>, RepoError>;
    }
}

#[test]
fn generated_mock_drives_the_same_service() {
    let mut repo = MockRepo::new();
    repo.expect_fetch()
        .with(eq(1))
        .times(1)
        .returning(|id| Ok(User::new(id, "John Doe")));

    let service = UserService::new(&repo);
    assert_eq!(service.get_user_name(1).unwrap(), "John Doe");
}

#[test]
fn generated_mock_reports_not_found() {
    let mut repo = MockRepo::new();
    repo.expect_fetch()
        .with(eq(999))
        .returning(|id| Err(RepoError::NotFound(id)));

    let service = UserService::new(&repo);
    assert_eq!(
        service.get_user_name(999).unwrap_err(),
        RepoError::NotFound(999)
    );
}

#[test]
fn generated_mock_enforces_call_order() {
    let mut seq = Sequence::new();
    let mut repo = MockRepo::new();

    repo.expect_fetch()
        .with(eq(1))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|id| Ok(User::new(id, "Alice")));
    repo.expect_delete()
        .with(eq(1))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let service = UserService::new(&repo);
    let _ = service.get_user_name(1).unwrap();
    service.remove_user(1).unwrap();
}

#[test]
fn generated_mock_lists_records() {
    let mut repo = MockRepo::new();
    repo.expect_list_all().times(1).returning(|| {
        Ok(vec![
            User::new(1, "Alice"),
            User::new(2, "Bob"),
            User::new(3, "Charlie"),
        ])
    });

    let service = UserService::new(&repo);
    assert_eq!(
        service.all_user_names().unwrap(),
        ["Alice", "Bob", "Charlie"]
    );
}
