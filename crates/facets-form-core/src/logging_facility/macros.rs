//! Operation logging macros
//!
//! Every operation is bracketed by a `start` event and either an `end` or an
//! `end_error` event, all tagged with the calling module and the op name.

/// Log the start of an operation
///
/// ```
/// # use facets_form_core::log_op_start;
/// log_op_start!("attach_form");
/// log_op_start!("attach_form", facets_source = "search_api:views_page__search__page_1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use facets_form_core::log_op_end;
/// log_op_end!("replay_page", duration_ms = 3, steps = 6);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Log a failed operation with the error's kind and stable code
///
/// `$err` is anything convertible into `ExError`.
///
/// ```
/// # use facets_form_core::{log_op_error, errors::FacetsFormError};
/// log_op_error!("range_condition", FacetsFormError::EmptyRange, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($($field)*)?
        )
    }};
}
