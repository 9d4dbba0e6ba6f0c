//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `todos_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use todos_core::storage::RepositoryError;

/// Map a transport-level SDK failure (no service response) to
/// `ConnectionFailed`. Returns the service error otherwise.
fn split_service_error<E, R>(err: SdkError<E, R>) -> Result<E, RepositoryError>
where
    E: std::error::Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    match err {
        SdkError::ServiceError(service_err) => Ok(service_err.into_err()),
        other => Err(RepositoryError::ConnectionFailed(
            DisplayErrorContext(&other).to_string(),
        )),
    }
}

/// Map a GetItem SDK error to RepositoryError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> RepositoryError {
    match split_service_error(err) {
        Err(connection) => connection,
        Ok(GetItemError::ResourceNotFoundException(_)) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        Ok(GetItemError::ProvisionedThroughputExceededException(_)) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        Ok(GetItemError::RequestLimitExceeded(_)) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        Ok(GetItemError::InternalServerError(_)) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        Ok(err) => RepositoryError::QueryFailed(format!("GetItem failed: {err}")),
    }
}

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    match split_service_error(err) {
        Err(connection) => connection,
        Ok(PutItemError::ResourceNotFoundException(_)) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        Ok(PutItemError::ProvisionedThroughputExceededException(_)) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        Ok(PutItemError::RequestLimitExceeded(_)) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        Ok(PutItemError::ItemCollectionSizeLimitExceededException(_)) => {
            RepositoryError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        Ok(PutItemError::TransactionConflictException(_)) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        Ok(PutItemError::InternalServerError(_)) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        Ok(err) => RepositoryError::QueryFailed(format!("PutItem failed: {err}")),
    }
}

/// Map a DeleteItem SDK error to RepositoryError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> RepositoryError {
    match split_service_error(err) {
        Err(connection) => connection,
        Ok(DeleteItemError::ResourceNotFoundException(_)) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        Ok(DeleteItemError::ProvisionedThroughputExceededException(_)) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        Ok(DeleteItemError::RequestLimitExceeded(_)) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        Ok(DeleteItemError::TransactionConflictException(_)) => {
            RepositoryError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        Ok(DeleteItemError::InternalServerError(_)) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        Ok(err) => RepositoryError::QueryFailed(format!("DeleteItem failed: {err}")),
    }
}

/// Map a Scan SDK error to RepositoryError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
) -> RepositoryError {
    match split_service_error(err) {
        Err(connection) => connection,
        Ok(ScanError::ResourceNotFoundException(_)) => {
            RepositoryError::QueryFailed("Table not found".to_string())
        }
        Ok(ScanError::ProvisionedThroughputExceededException(_)) => {
            RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        Ok(ScanError::RequestLimitExceeded(_)) => {
            RepositoryError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        Ok(ScanError::InternalServerError(_)) => {
            RepositoryError::QueryFailed("DynamoDB internal server error".to_string())
        }
        Ok(err) => RepositoryError::QueryFailed(format!("Scan failed: {err}")),
    }
}

/// Map a DescribeTable SDK error.
///
/// A missing table is an expected answer at startup, so it maps to
/// `Ok(None)` instead of an error.
pub fn map_describe_table_error<T, R: Debug + Send + Sync + 'static>(
    err: SdkError<DescribeTableError, R>,
) -> Result<Option<T>, RepositoryError> {
    match split_service_error(err) {
        Err(connection) => Err(connection),
        Ok(DescribeTableError::ResourceNotFoundException(_)) => Ok(None),
        Ok(DescribeTableError::InternalServerError(_)) => Err(RepositoryError::QueryFailed(
            "DynamoDB internal server error".to_string(),
        )),
        Ok(err) => Err(RepositoryError::QueryFailed(format!(
            "DescribeTable failed: {err}"
        ))),
    }
}

/// Map a CreateTable SDK error.
///
/// `ResourceInUseException` means another process created the table first;
/// that counts as success since the caller goes on to wait for it anyway.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
) -> Result<(), RepositoryError> {
    match split_service_error(err) {
        Err(connection) => Err(connection),
        Ok(CreateTableError::ResourceInUseException(_)) => Ok(()),
        Ok(CreateTableError::LimitExceededException(_)) => Err(RepositoryError::QueryFailed(
            "Table limit exceeded".to_string(),
        )),
        Ok(CreateTableError::InternalServerError(_)) => Err(RepositoryError::QueryFailed(
            "DynamoDB internal server error".to_string(),
        )),
        Ok(err) => Err(RepositoryError::QueryFailed(format!(
            "CreateTable failed: {err}"
        ))),
    }
}
