mod users;
pub use users::ManageUsers;
