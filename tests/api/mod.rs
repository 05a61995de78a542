mod connection_tests;
mod health_tests;
mod notification_tests;
mod websocket_tests;
