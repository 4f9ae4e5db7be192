pub mod terminal_size_query;
