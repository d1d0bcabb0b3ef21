//! Fixed statements against the `products` table. Values are always positional parameters.

pub const SELECT_ALL: &str = "SELECT id, name, type, count, price FROM products ORDER BY id";

pub const SELECT_ONE: &str = "SELECT id, name, type, count, price FROM products WHERE id = $1";

pub const INSERT: &str =
    "INSERT INTO products (name, type, count, price) VALUES ($1, $2, $3, $4) RETURNING id";

pub const UPDATE: &str = "UPDATE products SET name = $1, type = $2, count = $3, price = $4 \
     WHERE id = $5 RETURNING id, name, type, count, price";

pub const UPDATE_NAME: &str =
    "UPDATE products SET name = $1 WHERE id = $2 RETURNING id, name, type, count, price";

pub const DELETE: &str = "DELETE FROM products WHERE id = $1";

pub const PING: &str = "SELECT 1";
