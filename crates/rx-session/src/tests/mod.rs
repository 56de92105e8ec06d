mod file_store;
mod guard;
mod state_cell;
