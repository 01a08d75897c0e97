pub mod about;
pub mod contact;
pub mod contact_form;
pub mod footer;
pub mod header;
pub mod project_card;
pub mod projects;
pub mod scroll_buttons;
pub mod skills;
