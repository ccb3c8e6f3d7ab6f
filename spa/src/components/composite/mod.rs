pub mod favorite_button;
pub mod login_form;
pub mod movie_card;
pub mod navigation_bar;
pub mod pagination_controls;
pub mod review_form;
pub mod review_list;
