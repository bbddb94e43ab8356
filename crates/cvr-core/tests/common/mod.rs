pub mod comic_server;
