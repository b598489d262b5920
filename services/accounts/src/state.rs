use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::config::AccountsConfig;
use crate::infra::db::{
    DbAccountRepository, DbAddressRepository, DbEmailVerificationRepository,
    DbLocationRepository, DbPasswordResetRepository, DbUserRepository,
};

/// Entry point for embedding the accounts module: one database connection
/// and a constructor per typed repository.
#[derive(Clone)]
pub struct AccountsState {
    pub db: DatabaseConnection,
}

impl AccountsState {
    /// Connect to the database named by the configuration.
    pub async fn connect(config: &AccountsConfig) -> Result<Self, sea_orm::DbErr> {
        let db = Database::connect(&config.database_url).await?;
        info!("connected to accounts database");
        Ok(Self { db })
    }

    pub fn accounts(&self) -> DbAccountRepository {
        DbAccountRepository {
            db: self.db.clone(),
        }
    }

    pub fn email_verifications(&self) -> DbEmailVerificationRepository {
        DbEmailVerificationRepository {
            db: self.db.clone(),
        }
    }

    pub fn password_resets(&self) -> DbPasswordResetRepository {
        DbPasswordResetRepository {
            db: self.db.clone(),
        }
    }

    pub fn users(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn locations(&self) -> DbLocationRepository {
        DbLocationRepository {
            db: self.db.clone(),
        }
    }

    pub fn addresses(&self) -> DbAddressRepository {
        DbAddressRepository {
            db: self.db.clone(),
        }
    }
}
