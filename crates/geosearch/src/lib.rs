use std::error::Error;

pub mod database;
pub mod locator;

#[derive(Debug)]
pub enum RequestError {
    NotFound,
    UnsupportedFormat(String),
    Other(Box<dyn Error + Send + Sync>),
}

impl RequestError {
    pub fn other<T: Error + Send + Sync + 'static>(why: T) -> Self {
        Self::Other(Box::new(why))
    }
}

impl From<database::DatabaseError> for RequestError {
    fn from(value: database::DatabaseError) -> Self {
        match value {
            database::DatabaseError::NotFound => Self::NotFound,
            database::DatabaseError::Other(why) => Self::Other(why),
        }
    }
}

pub type RequestResult<O> = Result<O, RequestError>;

pub fn not_found_to_none<O>(result: RequestResult<O>) -> RequestResult<Option<O>> {
    if let Err(RequestError::NotFound) = result {
        Ok(None)
    } else {
        result.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_becomes_none() {
        let result: RequestResult<Option<i32>> =
            not_found_to_none(Err(RequestError::NotFound));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn values_become_some() {
        let result = not_found_to_none(Ok(7));
        assert!(matches!(result, Ok(Some(7))));
    }
}
