//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 문자열 구성, 풀 옵션 적용, ping/disconnect와
//! 리포지토리 계층에서 사용하는 고정 타임아웃 헬퍼를 제공합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//! use crate::db::Database;
//!
//! let database = std::sync::Arc::new(Database::from_env()?);
//! database.connect().await?;
//!
//! ServiceLocator::set(database);
//! ServiceLocator::initialize_all().await?;
//! ```
//!
//! 연결 전에 [`Database::ping`]이나 [`Database::get_database`]를 호출하면
//! [`AppError::UninitializedDatabase`]가 반환됩니다.

use std::future::Future;
use std::sync::RwLock;
use std::time::Duration;

use log::{debug, info};
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::Client;

use crate::core::errors::{AppError, AppResult};

pub mod collections;
pub mod config;

pub use config::{ConnectionSettings, DatabaseConfig, PoolConfig};

/// 연결 수립에 허용되는 최대 시간
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
/// ping 응답 대기 시간
const PING_TIMEOUT: Duration = Duration::from_secs(5);
/// 리포지토리 단일 작업에 허용되는 최대 시간
const OPERATION_TIMEOUT: Duration = Duration::from_secs(10);

/// MongoDB 데이터베이스 연결 래퍼
///
/// 연결 설정과 드라이버 클라이언트 핸들을 관리하며,
/// 리포지토리 계층에서 데이터베이스 작업을 위한 기본 인터페이스를 제공합니다.
/// 클라이언트 핸들은 `connect()` 성공 이후에만 존재합니다.
pub struct Database {
    /// 연결 문자열과 데이터베이스 이름
    config: DatabaseConfig,
    /// 연결된 MongoDB 클라이언트 (connect 전에는 None)
    client: RwLock<Option<Client>>,
}

impl Database {
    /// 주어진 설정으로 아직 연결되지 않은 Database 인스턴스를 생성합니다.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            client: RwLock::new(None),
        }
    }

    /// 환경 변수에서 연결 설정을 읽어 Database 인스턴스를 생성합니다.
    ///
    /// 이 시점에는 네트워크 I/O가 발생하지 않으며, 실제 연결은
    /// [`Database::connect`]에서 수행됩니다.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self::new(DatabaseConfig::from_env()?))
    }

    /// MongoDB 클라이언트를 생성하고 연결을 검증합니다.
    ///
    /// 환경 변수에서 읽은 커넥션 풀 설정을 적용하고,
    /// Stable API v1을 사용하도록 지정한 뒤 ping으로 연결 상태를 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 연결 문자열 파싱 실패, 연결/ping 실패
    pub async fn connect(&self) -> AppResult<()> {
        let mut client_options = ClientOptions::parse(self.config.connection_string())
            .await
            .map_err(|e| AppError::DatabaseError(format!("연결 문자열 파싱 실패: {}", e)))?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("blog_service".to_string());

        // 커넥션 풀 옵션 적용
        let pool = PoolConfig::from_env();
        client_options.max_pool_size = Some(pool.max_pool_size);
        client_options.min_pool_size = Some(pool.min_pool_size);
        client_options.max_idle_time = Some(pool.max_idle_time);
        // 드라이버는 커넥션 수명 제한 옵션을 제공하지 않습니다. 서버가 수명을 관리합니다.
        debug!(
            "커넥션 풀 설정: max={}, min={}, idle={:?}, lifetime={:?} (lifetime은 서버 관리)",
            pool.max_pool_size, pool.min_pool_size, pool.max_idle_time, pool.max_lifetime
        );

        client_options.connect_timeout = Some(CONNECT_TIMEOUT);
        client_options.server_selection_timeout = Some(CONNECT_TIMEOUT);

        // Stable API 지정 (Atlas 및 향후 서버 버전과의 호환성 보장)
        let server_api = ServerApi::builder().version(ServerApiVersion::V1).build();
        client_options.server_api = Some(server_api);

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(format!("클라이언트 생성 실패: {}", e)))?;

        // 연결 테스트
        run_ping(&client, self.config.database_name()).await?;

        info!("✅ MongoDB 연결 성공: {}", self.config.database_name());

        *self.client.write().unwrap() = Some(client);
        Ok(())
    }

    /// 현재 클라이언트가 활성 상태인지 ping으로 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UninitializedDatabase` - 아직 connect 되지 않은 경우
    /// * `AppError::DatabaseError` - ping 실패 또는 응답 시간 초과
    pub async fn ping(&self) -> AppResult<()> {
        let client = self.client()?;
        run_ping(&client, self.config.database_name()).await
    }

    /// 현재 클라이언트를 종료하고 핸들을 비웁니다.
    ///
    /// 연결된 적이 없으면 아무 작업도 하지 않습니다.
    pub async fn disconnect(&self) -> AppResult<()> {
        let client = self.client.write().unwrap().take();

        if let Some(client) = client {
            client.shutdown().await;
            info!("MongoDB 연결 종료됨");
        }

        Ok(())
    }

    /// MongoDB 데이터베이스 핸들을 반환합니다.
    ///
    /// 리포지토리에서 컬렉션에 접근할 때 사용됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::UninitializedDatabase` - 아직 connect 되지 않은 경우
    pub fn get_database(&self) -> AppResult<mongodb::Database> {
        Ok(self.client()?.database(self.config.database_name()))
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        self.config.database_name()
    }

    fn client(&self) -> AppResult<Client> {
        self.client
            .read()
            .unwrap()
            .clone()
            .ok_or(AppError::UninitializedDatabase)
    }
}

async fn run_ping(client: &Client, database_name: &str) -> AppResult<()> {
    let ping = async {
        client
            .database(database_name)
            .run_command(doc! { "ping": 1 })
            .await
    };

    match tokio::time::timeout(PING_TIMEOUT, ping).await {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(AppError::DatabaseError(format!("ping 실패: {}", e))),
        Err(_) => Err(AppError::DatabaseError(
            "ping 응답 시간이 초과되었습니다".to_string(),
        )),
    }
}

/// 데이터 액세스 작업에 고정 타임아웃을 적용합니다.
///
/// 모든 리포지토리 호출은 이 헬퍼를 거치며, 10초 안에 완료되지 않으면
/// `AppError::DatabaseError`로 실패합니다. 호출자 측 취소 전파는 없습니다.
pub async fn with_op_timeout<T, F>(operation: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(OPERATION_TIMEOUT, operation).await {
        Ok(result) => result,
        Err(_) => Err(AppError::DatabaseError(
            "데이터베이스 작업 시간이 초과되었습니다".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconnected_database() -> Database {
        Database::new(DatabaseConfig::parse("mongodb://localhost:27017/social-blog").unwrap())
    }

    #[tokio::test]
    async fn test_ping_before_connect_is_uninitialized() {
        let database = unconnected_database();

        match database.ping().await {
            Err(AppError::UninitializedDatabase) => {}
            other => panic!("expected UninitializedDatabase, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_get_database_before_connect_is_uninitialized() {
        let database = unconnected_database();

        assert!(matches!(
            database.get_database(),
            Err(AppError::UninitializedDatabase)
        ));
    }

    #[tokio::test]
    async fn test_disconnect_before_connect_is_noop() {
        let database = unconnected_database();

        assert!(database.disconnect().await.is_ok());
    }

    #[tokio::test]
    async fn test_with_op_timeout_passes_through_result() {
        let ok: AppResult<u32> = with_op_timeout(async { Ok(7) }).await;
        assert_eq!(ok.unwrap(), 7);

        let err: AppResult<u32> =
            with_op_timeout(async { Err(AppError::NotFound("없음".to_string())) }).await;
        assert!(matches!(err, Err(AppError::NotFound(_))));
    }
}
