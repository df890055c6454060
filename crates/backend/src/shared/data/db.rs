use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREAR_TABLA_PRODUCTOS: &str = r#"
    CREATE TABLE productos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL,
        precio REAL NOT NULL,
        descripcion TEXT NOT NULL DEFAULT '',
        imagen_url TEXT NOT NULL DEFAULT '',
        categoria TEXT NOT NULL DEFAULT ''
    );
"#;

// clave_idempotencia is nullable: orders posted without the header are
// recorded as-is. The UNIQUE constraint is what collapses replays.
const CREAR_TABLA_PEDIDOS: &str = r#"
    CREATE TABLE pedidos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nombre TEXT NOT NULL,
        telefono TEXT NOT NULL,
        producto_id INTEGER NOT NULL,
        producto_nombre TEXT NOT NULL,
        cantidad INTEGER NOT NULL,
        comentarios TEXT NOT NULL DEFAULT '',
        clave_idempotencia TEXT UNIQUE,
        fecha_pedido TEXT NOT NULL
    );
"#;

/// Opens the sqlite database and bootstraps the schema. Later calls are
/// no-ops, so tests and main can both initialize freely.
pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    if DB_CONN.get().is_some() {
        return Ok(());
    }

    let db_file = db_path.unwrap_or("target/db/catalogo.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;

    crear_tabla_si_falta(&conn, "productos", CREAR_TABLA_PRODUCTOS).await?;
    crear_tabla_si_falta(&conn, "pedidos", CREAR_TABLA_PEDIDOS).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

async fn crear_tabla_si_falta(
    conn: &DatabaseConnection,
    tabla: &str,
    sql: &str,
) -> anyhow::Result<()> {
    let existente = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            format!(
                "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
                tabla
            ),
        ))
        .await?;

    if existente.is_empty() {
        tracing::info!("Creating {} table", tabla);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
