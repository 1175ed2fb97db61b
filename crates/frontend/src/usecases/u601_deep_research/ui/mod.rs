pub mod api_status;
pub mod query_form;
pub mod result_view;

pub use api_status::ApiStatusBadge;
pub use query_form::QueryForm;
pub use result_view::ResultView;
