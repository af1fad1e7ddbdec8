pub mod nav;
pub mod profile_form;
pub mod toast;
