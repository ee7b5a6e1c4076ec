//! Service trait for stateful components

use crate::Result;
use async_trait::async_trait;

/// Service trait for stateful, long-running components
#[async_trait]
pub trait Service: Send + Sync {
    /// Service type name (unique identifier)
    fn service_type(&self) -> &str;

    /// Start the service (begin background tasks)
    async fn start(&mut self) -> Result<()> {
        Ok(())
    }

    /// Stop the service (cleanup)
    async fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    /// Check if service is running
    fn is_running(&self) -> bool {
        false
    }

    /// Get service health status
    async fn health_check(&self) -> Result<ServiceHealth> {
        Ok(ServiceHealth::Healthy)
    }
}

/// Service health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ServiceHealth {
    /// Service is healthy and operational
    Healthy,
    /// Service is degraded but functional
    Degraded,
    /// Service is unhealthy/not functional
    Unhealthy,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockService;

    #[async_trait]
    impl Service for MockService {
        fn service_type(&self) -> &str {
            "mock-service"
        }
    }

    #[tokio::test]
    async fn test_service_defaults() {
        let mut service = MockService;
        assert_eq!(service.service_type(), "mock-service");
        assert!(!service.is_running());
        assert!(service.start().await.is_ok());
        assert!(service.stop().await.is_ok());

        let health = service.health_check().await.unwrap();
        assert_eq!(health, ServiceHealth::Healthy);
    }
}
