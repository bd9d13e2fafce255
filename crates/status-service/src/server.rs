//! Listener setup.

use tokio::net::TcpListener;

use crate::error::StartupError;

/// Binds the listening socket. Failing here is fatal for the process.
pub async fn bind(addr: &str) -> Result<TcpListener, StartupError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_binding_a_taken_port_fails() {
        let first = bind("127.0.0.1:0").await.unwrap();
        let addr = first.local_addr().unwrap().to_string();

        let err = bind(&addr).await.unwrap_err();
        match err {
            StartupError::Bind { addr: failed, source } => {
                assert_eq!(failed, addr);
                assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_address_fails() {
        assert!(matches!(
            bind("not-an-address").await,
            Err(StartupError::Bind { .. })
        ));
    }
}
