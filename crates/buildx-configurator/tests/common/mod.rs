//! Shared helpers for configurator integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use buildx_configurator::Wizard;
use buildx_core::AppError;
use buildx_core::config::AppConfig;
use buildx_core::result::AppResult;
use buildx_core::traits::{IntakeReceipt, NoDelay, OrderIntake};
use buildx_core::types::{OrderId, OrderPayload};
use buildx_geometry::MeshFormatCatalog;

/// A wizard wired with defaults and a synchronous auto-advance.
pub fn test_wizard() -> Wizard {
    Wizard::new(
        AppConfig::default(),
        Arc::new(MeshFormatCatalog::default()),
        Arc::new(NoDelay),
    )
}

/// Binary STL fixture with the given triangles.
pub fn binary_stl(triangles: &[[[f32; 3]; 3]]) -> Bytes {
    let mut out = vec![0u8; 80];
    out.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
    for tri in triangles {
        out.extend_from_slice(&[0u8; 12]);
        for vertex in tri {
            for coord in vertex {
                out.extend_from_slice(&coord.to_le_bytes());
            }
        }
        out.extend_from_slice(&[0u8; 2]);
    }
    Bytes::from(out)
}

/// An STL whose bounding box is 10 × 20 × 40 mm (volume 8000 mm³).
pub fn sample_stl() -> Bytes {
    binary_stl(&[[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 20.0, 40.0]]])
}

/// Intake double that records every submission.
#[derive(Debug, Default)]
pub struct MemoryIntake {
    /// Submitted `(payload, file bytes)` pairs.
    pub orders: Mutex<Vec<(OrderPayload, Bytes)>>,
}

#[async_trait]
impl OrderIntake for MemoryIntake {
    async fn submit(&self, payload: &OrderPayload, file: Bytes) -> AppResult<IntakeReceipt> {
        let mut orders = self.orders.lock().unwrap();
        orders.push((payload.clone(), file));
        Ok(IntakeReceipt {
            order_id: OrderId::new(format!("BX-TEST-{}", orders.len())),
        })
    }
}

impl MemoryIntake {
    /// Number of recorded submissions.
    pub fn submission_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }
}

/// Intake double that always fails.
#[derive(Debug, Default)]
pub struct OfflineIntake;

#[async_trait]
impl OrderIntake for OfflineIntake {
    async fn submit(&self, _payload: &OrderPayload, _file: Bytes) -> AppResult<IntakeReceipt> {
        Err(AppError::submission("intake service unreachable"))
    }
}
