use portage_accounts::error::AccountsServiceError;
use portage_accounts::usecase::account::{
    ContactChannel, DeleteAccountUseCase, FindAccountByEmailUseCase, GetAccountUseCase,
    MarkVerifiedUseCase, RegisterAccountInput, RegisterAccountUseCase,
};
use uuid::Uuid;

use crate::helpers::{MockAccountRepo, test_account};

fn register_input(email: &str) -> RegisterAccountInput {
    RegisterAccountInput {
        email: Some(email.to_owned()),
        password_hash: Some("argon2id$stub".to_owned()),
        google_id: None,
        phone: None,
        passport_number: None,
        national_id: None,
    }
}

#[tokio::test]
async fn should_register_account_with_defaults() {
    let repo = MockAccountRepo::empty();
    let accounts = repo.accounts_handle();
    let uc = RegisterAccountUseCase { repo };

    let account = uc.execute(register_input("bob@example.com")).await.unwrap();

    assert_eq!(account.email.as_deref(), Some("bob@example.com"));
    assert!(!account.email_verified);
    assert!(!account.phone_verified);
    assert!(!account.passport_verified);
    assert!(account.is_active);

    let stored = accounts.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, account.id);
}

#[tokio::test]
async fn should_reject_malformed_email_on_register() {
    let uc = RegisterAccountUseCase {
        repo: MockAccountRepo::empty(),
    };
    let result = uc.execute(register_input("not-an-email")).await;
    assert!(matches!(result, Err(AccountsServiceError::InvalidEmail)));
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let uc = RegisterAccountUseCase {
        repo: MockAccountRepo::empty(),
    };
    uc.execute(register_input("carol@example.com")).await.unwrap();
    let result = uc.execute(register_input("carol@example.com")).await;
    assert!(matches!(result, Err(AccountsServiceError::AlreadyExists)));
}

#[tokio::test]
async fn should_register_account_without_email() {
    let uc = RegisterAccountUseCase {
        repo: MockAccountRepo::empty(),
    };
    let account = uc
        .execute(RegisterAccountInput {
            email: None,
            password_hash: None,
            google_id: Some("google-oauth2|12345".to_owned()),
            phone: None,
            passport_number: None,
            national_id: None,
        })
        .await
        .unwrap();
    assert!(account.email.is_none());
    assert_eq!(account.google_id.as_deref(), Some("google-oauth2|12345"));
}

#[tokio::test]
async fn should_return_account_not_found_for_unknown_id() {
    let uc = GetAccountUseCase {
        repo: MockAccountRepo::empty(),
    };
    let result = uc.execute(Uuid::new_v4()).await;
    assert!(matches!(result, Err(AccountsServiceError::AccountNotFound)));
}

#[tokio::test]
async fn should_find_account_by_email() {
    let account = test_account();
    let uc = FindAccountByEmailUseCase {
        repo: MockAccountRepo::new(vec![account.clone()]),
    };
    let found = uc.execute("alice@example.com").await.unwrap();
    assert_eq!(found.id, account.id);
}

#[tokio::test]
async fn should_mark_email_verified() {
    let account = test_account();
    let repo = MockAccountRepo::new(vec![account.clone()]);
    let accounts = repo.accounts_handle();
    let uc = MarkVerifiedUseCase { repo };

    uc.execute(account.id, ContactChannel::Email).await.unwrap();

    let stored = accounts.lock().unwrap();
    assert!(stored[0].email_verified);
    assert!(!stored[0].phone_verified);
}

#[tokio::test]
async fn should_mark_phone_verified() {
    let account = test_account();
    let repo = MockAccountRepo::new(vec![account.clone()]);
    let accounts = repo.accounts_handle();
    let uc = MarkVerifiedUseCase { repo };

    uc.execute(account.id, ContactChannel::Phone).await.unwrap();

    assert!(accounts.lock().unwrap()[0].phone_verified);
}

#[tokio::test]
async fn should_fail_marking_unknown_account_verified() {
    let uc = MarkVerifiedUseCase {
        repo: MockAccountRepo::empty(),
    };
    let result = uc.execute(Uuid::new_v4(), ContactChannel::Email).await;
    assert!(matches!(result, Err(AccountsServiceError::AccountNotFound)));
}

#[tokio::test]
async fn should_block_delete_while_rows_reference_the_account() {
    let account = test_account();
    let uc = DeleteAccountUseCase {
        repo: MockAccountRepo::with_dependents(vec![account.clone()]),
    };
    let result = uc.execute(account.id).await;
    assert!(matches!(result, Err(AccountsServiceError::AccountInUse)));
}

#[tokio::test]
async fn should_delete_unreferenced_account() {
    let account = test_account();
    let repo = MockAccountRepo::new(vec![account.clone()]);
    let accounts = repo.accounts_handle();
    let uc = DeleteAccountUseCase { repo };

    uc.execute(account.id).await.unwrap();
    assert!(accounts.lock().unwrap().is_empty());

    // Second delete: the row is gone.
    let result = uc.execute(account.id).await;
    assert!(matches!(result, Err(AccountsServiceError::AccountNotFound)));
}
