pub const API_NAME: &str = "[dealership-api]";
