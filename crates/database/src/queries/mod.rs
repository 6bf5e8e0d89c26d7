use geosearch::database::DatabaseError;

pub mod distance;
pub mod location;
pub mod proximity;
pub mod region;

pub(crate) fn convert_error(why: sqlx::Error) -> DatabaseError {
    match why {
        sqlx::Error::RowNotFound => DatabaseError::NotFound,
        _ => DatabaseError::Other(Box::new(why)),
    }
}
