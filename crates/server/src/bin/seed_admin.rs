//! Provision an ADMIN account. Admins cannot self-register, so
//! deployments create them with:
//!
//!   cargo run --bin seed-admin --features server -- admin@example.com <password>

use server::auth::password;
use server::repo::account;

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(email), Some(pw)) = (args.next(), args.next()) else {
        eprintln!("usage: seed-admin <email> <password>");
        std::process::exit(2);
    };

    let hash = match password::hash_password(&pw) {
        Ok(hash) => hash,
        Err(e) => {
            eprintln!("failed to hash password: {e}");
            std::process::exit(1);
        }
    };

    let pool = server::db::create_pool();
    server::db::run_migrations(&pool).await;

    match account::create_admin(&pool, &email, &hash).await {
        Ok(admin) => println!("admin account created: {} ({})", admin.email, admin.id),
        Err(e) => {
            eprintln!("failed to create admin account: {e}");
            std::process::exit(1);
        }
    }
}
