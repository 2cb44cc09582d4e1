use crate::*;

pub(crate) fn validate_star_name(name: &str) -> Result<(), StarNotaryError> {
    if name.trim().is_empty() {
        return Err(StarNotaryError::InvalidInput(
            "Star name must not be empty".into(),
        ));
    }
    if name.len() > MAX_STAR_NAME_LEN {
        return Err(StarNotaryError::InvalidInput(format!(
            "Star name exceeds max length of {} bytes",
            MAX_STAR_NAME_LEN
        )));
    }
    Ok(())
}

// A zero price is indistinguishable from "not for sale".
pub(crate) fn validate_price(price: U128) -> Result<(), StarNotaryError> {
    if price.0 == 0 {
        return Err(StarNotaryError::InvalidInput(
            "Price must be greater than 0".into(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_metadata_field(field: &str, value: &str) -> Result<(), StarNotaryError> {
    if value.trim().is_empty() {
        return Err(StarNotaryError::InvalidInput(format!(
            "Contract metadata field `{}` must not be empty",
            field
        )));
    }
    if value.len() > MAX_METADATA_FIELD_LEN {
        return Err(StarNotaryError::InvalidInput(format!(
            "Contract metadata field `{}` exceeds max length of {} bytes",
            field, MAX_METADATA_FIELD_LEN
        )));
    }
    Ok(())
}

pub(crate) fn page_bounds(from_index: Option<U128>, limit: Option<u64>) -> (usize, usize) {
    let start = from_index
        .map(|i| usize::try_from(i.0).unwrap_or(usize::MAX))
        .unwrap_or(0);
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT) as usize;
    (start, limit)
}
