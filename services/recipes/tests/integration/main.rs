mod helpers;
mod recipe_flow_test;
mod toggle_test;
