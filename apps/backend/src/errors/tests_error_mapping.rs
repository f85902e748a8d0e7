// Error mapping from the domain layer to HTTP, no database or server involved
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_not_found_by_kind() {
    let cases = [
        (NotFoundKind::User, ErrorCode::UserNotFound),
        (NotFoundKind::Item, ErrorCode::ItemNotFound),
        (NotFoundKind::Other("Record".into()), ErrorCode::NotFound),
    ];

    for (kind, expected) in cases {
        let app: AppError = DomainError::not_found(kind, "missing").into();
        assert_eq!(app.code(), expected);
        assert_eq!(app.status().as_u16(), 404);
    }
}

#[test]
fn maps_infra_to_500() {
    let unavailable: AppError =
        DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable").into();
    assert_eq!(unavailable.code(), ErrorCode::DbUnavailable);
    assert_eq!(unavailable.status().as_u16(), 500);

    let other: AppError =
        DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database operation failed")
            .into();
    assert_eq!(other.code(), ErrorCode::DbError);
    assert_eq!(other.status().as_u16(), 500);
}

#[test]
fn db_errors_flow_through_domain_mapping() {
    let app: AppError = sea_orm::DbErr::Conn(sea_orm::RuntimeErr::Internal("refused".into())).into();
    assert_eq!(app.code(), ErrorCode::DbUnavailable);

    let app: AppError = sea_orm::DbErr::RecordNotFound("users".into()).into();
    assert_eq!(app.code(), ErrorCode::NotFound);
}
