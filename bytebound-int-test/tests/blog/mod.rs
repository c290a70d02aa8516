mod comment_flow_test;
mod post_flow_test;
mod user_flow_test;
