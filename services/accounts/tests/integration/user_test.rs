use uuid::Uuid;

use portage_accounts::error::AccountsServiceError;
use portage_accounts::usecase::user::{
    CreateUserInput, CreateUserUseCase, UpdateProfileInput, UpdateProfileUseCase,
};
use portage_domain::profile::RatingScore;

use crate::helpers::MockUserRepo;

fn create_input(account_id: Uuid, username: &str) -> CreateUserInput {
    CreateUserInput {
        account_id,
        first_name: Some("Alice".to_owned()),
        last_name: Some("Smith".to_owned()),
        avatar_url: None,
        username: Some(username.to_owned()),
        rating_score: None,
        total_deliveries_completed: None,
    }
}

fn empty_update() -> UpdateProfileInput {
    UpdateProfileInput {
        first_name: None,
        last_name: None,
        avatar_url: None,
        username: None,
        rating_score: None,
        total_deliveries_completed: None,
    }
}

#[tokio::test]
async fn should_create_profile_for_existing_account() {
    let account_id = Uuid::new_v4();
    let repo = MockUserRepo::for_accounts(vec![account_id]);
    let users = repo.users_handle();
    let uc = CreateUserUseCase { repo };

    let user = uc.execute(create_input(account_id, "alice")).await.unwrap();

    assert_eq!(user.account_id, account_id);
    assert_eq!(users.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_require_existing_account_for_profile() {
    let uc = CreateUserUseCase {
        repo: MockUserRepo::for_accounts(vec![]),
    };
    let result = uc.execute(create_input(Uuid::new_v4(), "ghost")).await;
    assert!(matches!(result, Err(AccountsServiceError::AccountNotFound)));
}

#[tokio::test]
async fn should_enforce_one_profile_per_account() {
    let account_id = Uuid::new_v4();
    let uc = CreateUserUseCase {
        repo: MockUserRepo::for_accounts(vec![account_id]),
    };
    uc.execute(create_input(account_id, "alice")).await.unwrap();
    let result = uc.execute(create_input(account_id, "alice2")).await;
    assert!(matches!(result, Err(AccountsServiceError::AlreadyExists)));
}

#[tokio::test]
async fn should_reject_duplicate_username() {
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();
    let uc = CreateUserUseCase {
        repo: MockUserRepo::for_accounts(vec![first, second]),
    };
    uc.execute(create_input(first, "alice")).await.unwrap();
    let result = uc.execute(create_input(second, "alice")).await;
    assert!(matches!(result, Err(AccountsServiceError::AlreadyExists)));
}

#[tokio::test]
async fn should_update_profile_fields() {
    let account_id = Uuid::new_v4();
    let repo = MockUserRepo::for_accounts(vec![account_id]);
    let users = repo.users_handle();
    let create = CreateUserUseCase { repo };
    let user = create
        .execute(create_input(account_id, "alice"))
        .await
        .unwrap();

    let update = UpdateProfileUseCase {
        repo: MockUserRepo {
            users,
            known_accounts: vec![account_id],
        },
    };
    update
        .execute(
            user.id,
            UpdateProfileInput {
                rating_score: Some(5),
                total_deliveries_completed: Some(42),
                ..empty_update()
            },
        )
        .await
        .unwrap();

    let stored = update.repo.users.lock().unwrap();
    assert_eq!(stored[0].rating_score, RatingScore::new(5));
    assert_eq!(stored[0].total_deliveries_completed, Some(42));
    assert_eq!(stored[0].username.as_deref(), Some("alice"));
}

#[tokio::test]
async fn should_fail_updating_unknown_user() {
    let uc = UpdateProfileUseCase {
        repo: MockUserRepo::for_accounts(vec![]),
    };
    let result = uc
        .execute(
            Uuid::new_v4(),
            UpdateProfileInput {
                first_name: Some("Ghost".to_owned()),
                ..empty_update()
            },
        )
        .await;
    assert!(matches!(result, Err(AccountsServiceError::UserNotFound)));
}
