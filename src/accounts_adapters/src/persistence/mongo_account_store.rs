use std::time::Duration;

use accounts_core::{
    Account, AccountId, AccountStore, AccountStoreError, NewAccount, PasswordHash, Role,
};
use mongodb::{
    Client, Collection, IndexModel,
    bson::{self, doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::{ClientOptions, IndexOptions},
};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::{STORE_CALL_TIMEOUT, bounded};

/// Budget for establishing the connection and the initial ping.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const DUPLICATE_KEY: i32 = 11000;

/// Stored shape of an account.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    email: String,
    username: String,
    password: String,
    verified: bool,
    registered_at: String,
    role: Option<Role>,
}

impl From<NewAccount> for AccountDocument {
    fn from(account: NewAccount) -> Self {
        Self {
            id: None,
            email: account.email,
            username: account.username,
            password: account.password.as_phc().to_string(),
            verified: account.verified,
            registered_at: account.registered_at,
            role: account.role,
        }
    }
}

impl TryFrom<AccountDocument> for Account {
    type Error = AccountStoreError;

    fn try_from(document: AccountDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| AccountStoreError::UnexpectedError("document without _id".into()))?;
        let password = PasswordHash::parse(document.password)
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        Ok(Account {
            id: AccountId::new(id.to_hex()),
            email: document.email,
            username: document.username,
            password,
            verified: document.verified,
            registered_at: document.registered_at,
            role: document.role,
        })
    }
}

fn object_id(id: &AccountId) -> Result<ObjectId, AccountStoreError> {
    ObjectId::parse_str(id.as_str()).map_err(|_| AccountStoreError::InvalidId)
}

fn unexpected(err: mongodb::error::Error) -> AccountStoreError {
    AccountStoreError::UnexpectedError(err.to_string())
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == DUPLICATE_KEY
    )
}

fn write_error(err: mongodb::error::Error) -> AccountStoreError {
    if is_duplicate_key(&err) {
        AccountStoreError::AccountAlreadyExists
    } else {
        unexpected(err)
    }
}

/// MongoDB-backed account store. Ids are the documents' `ObjectId`s in hex.
#[derive(Clone)]
pub struct MongoAccountStore {
    collection: Collection<AccountDocument>,
    call_timeout: Duration,
}

impl MongoAccountStore {
    pub fn new(client: &Client, database: &str, collection: &str) -> Self {
        Self {
            collection: client.database(database).collection(collection),
            call_timeout: STORE_CALL_TIMEOUT,
        }
    }

    /// Connects to `url` and pings `database` before handing out the client.
    #[tracing::instrument(name = "Connecting to MongoDB", skip_all, fields(database = %database))]
    pub async fn connect(url: &str, database: &str) -> Result<Client, mongodb::error::Error> {
        let mut options = ClientOptions::parse(url).await?;
        options.connect_timeout = Some(CONNECT_TIMEOUT);
        options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        let client = Client::with_options(options)?;
        client
            .database(database)
            .run_command(doc! { "ping": 1 })
            .await?;

        tracing::info!("connected to MongoDB");
        Ok(client)
    }

    /// Creates the unique index on `email` the store relies on for
    /// [`AccountStoreError::AccountAlreadyExists`]. Idempotent.
    #[tracing::instrument(name = "Ensuring account indexes", skip_all)]
    pub async fn ensure_indexes(&self) -> Result<(), AccountStoreError> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection
            .create_index(index)
            .await
            .map(|_| ())
            .map_err(unexpected)
    }
}

#[async_trait::async_trait]
impl AccountStore for MongoAccountStore {
    #[tracing::instrument(name = "Inserting account into MongoDB", skip_all)]
    async fn create(
        &self,
        account: NewAccount,
        cancel: &CancellationToken,
    ) -> Result<AccountId, AccountStoreError> {
        let document = AccountDocument::from(account);

        let result = bounded(cancel, self.call_timeout, async {
            self.collection
                .insert_one(&document)
                .await
                .map_err(write_error)
        })
        .await?;

        result
            .inserted_id
            .as_object_id()
            .map(|id| AccountId::new(id.to_hex()))
            .ok_or_else(|| AccountStoreError::UnexpectedError("inserted id is not an ObjectId".into()))
    }

    #[tracing::instrument(name = "Finding account by email in MongoDB", skip_all)]
    async fn find_by_email(
        &self,
        email: &str,
        cancel: &CancellationToken,
    ) -> Result<Account, AccountStoreError> {
        let document = bounded(cancel, self.call_timeout, async {
            self.collection
                .find_one(doc! { "email": email })
                .await
                .map_err(unexpected)
        })
        .await?;

        document
            .ok_or(AccountStoreError::AccountNotFound)?
            .try_into()
    }

    #[tracing::instrument(name = "Finding account by id in MongoDB", skip_all, fields(id = %id))]
    async fn find_by_id(
        &self,
        id: &AccountId,
        cancel: &CancellationToken,
    ) -> Result<Account, AccountStoreError> {
        let oid = object_id(id)?;

        let document = bounded(cancel, self.call_timeout, async {
            self.collection
                .find_one(doc! { "_id": oid })
                .await
                .map_err(unexpected)
        })
        .await?;

        document
            .ok_or(AccountStoreError::AccountNotFound)?
            .try_into()
    }

    #[tracing::instrument(name = "Updating account in MongoDB", skip_all, fields(id = %account.id))]
    async fn update_partially(
        &self,
        account: &Account,
        cancel: &CancellationToken,
    ) -> Result<(), AccountStoreError> {
        let oid = object_id(&account.id)?;
        let document = AccountDocument {
            id: None,
            email: account.email.clone(),
            username: account.username.clone(),
            password: account.password.as_phc().to_string(),
            verified: account.verified,
            registered_at: account.registered_at.clone(),
            role: account.role.clone(),
        };
        let fields =
            bson::to_document(&document).map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let result = bounded(cancel, self.call_timeout, async {
            self.collection
                .update_one(doc! { "_id": oid }, doc! { "$set": fields })
                .await
                .map_err(write_error)
        })
        .await?;

        if result.matched_count == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Deleting account from MongoDB", skip_all, fields(id = %id))]
    async fn delete(
        &self,
        id: &AccountId,
        cancel: &CancellationToken,
    ) -> Result<(), AccountStoreError> {
        let oid = object_id(id)?;

        let result = bounded(cancel, self.call_timeout, async {
            self.collection
                .delete_one(doc! { "_id": oid })
                .await
                .map_err(unexpected)
        })
        .await?;

        if result.deleted_count == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }

        Ok(())
    }
}
