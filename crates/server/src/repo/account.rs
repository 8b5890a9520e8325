use shared_types::{
    Account, AppError, CompanyProfile, Role, StudentProfile, UpdateCompanyProfileRequest,
    UpdateStudentProfileRequest,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Create a STUDENT account together with its profile row.
/// The two inserts share a transaction so a failed profile insert
/// never leaves an account without one.
pub async fn create_student(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
    full_name: &str,
) -> Result<Account, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (email, password_hash, role)
        VALUES ($1, $2, $3)
        RETURNING id, email, password_hash, role, created_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(Role::Student.as_str())
    .fetch_one(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    sqlx::query("INSERT INTO student_profiles (account_id, full_name) VALUES ($1, $2)")
        .bind(account.id)
        .bind(full_name)
        .execute(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    Ok(account)
}

/// Create a COMPANY account together with its profile row.
pub async fn create_company(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
    company_name: &str,
) -> Result<Account, AppError> {
    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (email, password_hash, role)
        VALUES ($1, $2, $3)
        RETURNING id, email, password_hash, role, created_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(Role::Company.as_str())
    .fetch_one(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    sqlx::query("INSERT INTO company_profiles (account_id, company_name) VALUES ($1, $2)")
        .bind(account.id)
        .bind(company_name)
        .execute(&mut *tx)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    Ok(account)
}

/// Create an ADMIN account. Admins carry no profile row; they are
/// provisioned by the seed binary, never through registration.
pub async fn create_admin(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
) -> Result<Account, AppError> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        INSERT INTO accounts (email, password_hash, role)
        VALUES ($1, $2, $3)
        RETURNING id, email, password_hash, role, created_at
        "#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(Role::Admin.as_str())
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(account)
}

/// Find an account by email (login lookup).
pub async fn find_by_email(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<Account>, AppError> {
    let row = sqlx::query_as::<_, Account>(
        "SELECT id, email, password_hash, role, created_at FROM accounts WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Find an account by ID (session verification).
pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<Account>, AppError> {
    let row = sqlx::query_as::<_, Account>(
        "SELECT id, email, password_hash, role, created_at FROM accounts WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Fetch a student profile by its owning account.
pub async fn student_profile(
    pool: &Pool<Postgres>,
    account_id: Uuid,
) -> Result<Option<StudentProfile>, AppError> {
    let row = sqlx::query_as::<_, StudentProfile>(
        r#"
        SELECT account_id, full_name, address, phone, updated_at
        FROM student_profiles
        WHERE account_id = $1
        "#,
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Fetch a company profile by its owning account.
pub async fn company_profile(
    pool: &Pool<Postgres>,
    account_id: Uuid,
) -> Result<Option<CompanyProfile>, AppError> {
    let row = sqlx::query_as::<_, CompanyProfile>(
        r#"
        SELECT account_id, company_name, description, website, location,
               contact_email, phone, updated_at
        FROM company_profiles
        WHERE account_id = $1
        "#,
    )
    .bind(account_id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(row)
}

/// Update a student profile. Only provided fields change.
pub async fn update_student_profile(
    pool: &Pool<Postgres>,
    account_id: Uuid,
    req: UpdateStudentProfileRequest,
) -> Result<Option<StudentProfile>, AppError> {
    let existing = match student_profile(pool, account_id).await? {
        Some(p) => p,
        None => return Ok(None),
    };

    let full_name = req.full_name.unwrap_or(existing.full_name);
    let address = req.address.unwrap_or(existing.address);
    let phone = req.phone.unwrap_or(existing.phone);

    let row = sqlx::query_as::<_, StudentProfile>(
        r#"
        UPDATE student_profiles
        SET full_name = $2, address = $3, phone = $4, updated_at = NOW()
        WHERE account_id = $1
        RETURNING account_id, full_name, address, phone, updated_at
        "#,
    )
    .bind(account_id)
    .bind(full_name)
    .bind(address)
    .bind(phone)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(Some(row))
}

/// Update a company profile. Only provided fields change. A renamed
/// company also renames the copy stored on its offers, in the same
/// transaction, so the directory never shows a stale name.
pub async fn update_company_profile(
    pool: &Pool<Postgres>,
    account_id: Uuid,
    req: UpdateCompanyProfileRequest,
) -> Result<Option<CompanyProfile>, AppError> {
    let existing = match company_profile(pool, account_id).await? {
        Some(p) => p,
        None => return Ok(None),
    };

    let renamed = matches!(&req.company_name, Some(n) if *n != existing.company_name);

    let company_name = req.company_name.unwrap_or(existing.company_name);
    let description = req.description.unwrap_or(existing.description);
    let website = req.website.unwrap_or(existing.website);
    let location = req.location.unwrap_or(existing.location);
    let contact_email = req.contact_email.unwrap_or(existing.contact_email);
    let phone = req.phone.unwrap_or(existing.phone);

    let mut tx = pool.begin().await.map_err(SqlxErrorExt::into_app_error)?;

    let row = sqlx::query_as::<_, CompanyProfile>(
        r#"
        UPDATE company_profiles
        SET company_name = $2, description = $3, website = $4, location = $5,
            contact_email = $6, phone = $7, updated_at = NOW()
        WHERE account_id = $1
        RETURNING account_id, company_name, description, website, location,
                  contact_email, phone, updated_at
        "#,
    )
    .bind(account_id)
    .bind(&company_name)
    .bind(description)
    .bind(website)
    .bind(location)
    .bind(contact_email)
    .bind(phone)
    .fetch_one(&mut *tx)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    if renamed {
        sqlx::query("UPDATE offers SET company_name = $2, updated_at = NOW() WHERE company_id = $1")
            .bind(account_id)
            .bind(&company_name)
            .execute(&mut *tx)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;
    }

    tx.commit().await.map_err(SqlxErrorExt::into_app_error)?;

    Ok(Some(row))
}
