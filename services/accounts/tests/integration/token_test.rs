use chrono::{Duration, Utc};
use uuid::Uuid;

use portage_accounts::domain::types::TOKEN_LEN;
use portage_accounts::error::AccountsServiceError;
use portage_accounts::usecase::token::{
    GetEmailVerificationUseCase, GetPasswordResetUseCase, IssueEmailVerificationInput,
    IssueEmailVerificationUseCase, IssuePasswordResetInput, IssuePasswordResetUseCase,
};
use portage_domain::pagination::PageRequest;

use crate::helpers::{MockEmailVerificationRepo, MockPasswordResetRepo};

#[tokio::test]
async fn should_issue_opaque_email_verification_token() {
    let account_id = Uuid::new_v4();
    let expires_at = Utc::now() + Duration::hours(24);
    let uc = IssueEmailVerificationUseCase {
        repo: MockEmailVerificationRepo::for_accounts(vec![account_id]),
    };

    let verification = uc
        .execute(IssueEmailVerificationInput {
            account_id,
            expires_at,
        })
        .await
        .unwrap();

    assert_eq!(verification.account_id, account_id);
    assert_eq!(verification.expires_at, expires_at);
    assert_eq!(verification.token.len(), TOKEN_LEN);
    assert!(
        verification
            .token
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
        "token should be uppercase alphanumeric"
    );
}

#[tokio::test]
async fn should_store_expiry_verbatim_even_in_the_past() {
    // The module stores expires_at and never interprets it: issuing an
    // already-expired token succeeds and the row stays retrievable.
    let account_id = Uuid::new_v4();
    let expires_at = Utc::now() - Duration::hours(1);
    let repo = MockEmailVerificationRepo::for_accounts(vec![account_id]);
    let rows = repo.rows_handle();
    let issue = IssueEmailVerificationUseCase { repo };

    let verification = issue
        .execute(IssueEmailVerificationInput {
            account_id,
            expires_at,
        })
        .await
        .unwrap();
    assert_eq!(verification.expires_at, expires_at);

    let get = GetEmailVerificationUseCase {
        repo: MockEmailVerificationRepo {
            rows,
            known_accounts: vec![account_id],
        },
    };
    let found = get.execute(&verification.token).await.unwrap();
    assert_eq!(found.id, verification.id);
    assert_eq!(found.expires_at, expires_at);
}

#[tokio::test]
async fn should_fail_issuing_for_unknown_account() {
    let uc = IssueEmailVerificationUseCase {
        repo: MockEmailVerificationRepo::for_accounts(vec![]),
    };
    let result = uc
        .execute(IssueEmailVerificationInput {
            account_id: Uuid::new_v4(),
            expires_at: Utc::now() + Duration::hours(24),
        })
        .await;
    assert!(matches!(result, Err(AccountsServiceError::AccountNotFound)));
}

#[tokio::test]
async fn should_return_token_not_found_for_unknown_token() {
    let uc = GetEmailVerificationUseCase {
        repo: MockEmailVerificationRepo::for_accounts(vec![]),
    };
    let result = uc.execute("UNKNOWNTOKEN").await;
    assert!(matches!(result, Err(AccountsServiceError::TokenNotFound)));
}

#[tokio::test]
async fn should_issue_and_fetch_password_reset() {
    let account_id = Uuid::new_v4();
    let expires_at = Utc::now() + Duration::minutes(30);
    let repo = MockPasswordResetRepo::for_accounts(vec![account_id]);
    let rows = repo.rows_handle();
    let issue = IssuePasswordResetUseCase { repo };

    let reset = issue
        .execute(IssuePasswordResetInput {
            account_id,
            expires_at,
        })
        .await
        .unwrap();
    assert_eq!(reset.token.len(), TOKEN_LEN);

    let get = GetPasswordResetUseCase {
        repo: MockPasswordResetRepo {
            rows,
            known_accounts: vec![account_id],
        },
    };
    let found = get.execute(&reset.token).await.unwrap();
    assert_eq!(found.id, reset.id);
    assert_eq!(found.account_id, account_id);
}

#[tokio::test]
async fn should_list_issued_tokens_for_account() {
    use portage_accounts::domain::repository::EmailVerificationRepository;

    let account_id = Uuid::new_v4();
    let other_account = Uuid::new_v4();
    let repo = MockEmailVerificationRepo::for_accounts(vec![account_id, other_account]);
    let rows = repo.rows_handle();
    let issue = IssueEmailVerificationUseCase { repo };

    for _ in 0..3 {
        issue
            .execute(IssueEmailVerificationInput {
                account_id,
                expires_at: Utc::now() + Duration::hours(24),
            })
            .await
            .unwrap();
    }
    issue
        .execute(IssueEmailVerificationInput {
            account_id: other_account,
            expires_at: Utc::now() + Duration::hours(24),
        })
        .await
        .unwrap();

    let list_repo = MockEmailVerificationRepo {
        rows,
        known_accounts: vec![account_id, other_account],
    };
    let listed = list_repo
        .list_for_account(account_id, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(listed.len(), 3);
    assert!(listed.iter().all(|r| r.account_id == account_id));
}
