//! Scripted marketplace sources with call counters.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use seedscout::domain::{CollectionKind, ContractAddress, TokenId};
use seedscout::error::LookupError;
use seedscout::marketplace::{AssetLookup, AssetMetadata, PointsChannel};

/// Image URL the scripted asset source hands out for a token.
pub fn mock_image_url(token: &TokenId) -> String {
    format!("https://img.example/{token}.png")
}

enum AssetScript {
    /// Answer with a per-token image URL.
    Found,
    /// Answer without an image field.
    Missing,
    /// Fail every lookup.
    Fail,
}

/// Scripted [`AssetLookup`] that counts invocations.
pub struct MockAssets {
    script: AssetScript,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl MockAssets {
    pub fn found() -> Self {
        Self::with_script(AssetScript::Found)
    }

    pub fn missing_image() -> Self {
        Self::with_script(AssetScript::Missing)
    }

    pub fn failing() -> Self {
        Self::with_script(AssetScript::Fail)
    }

    fn with_script(script: AssetScript) -> Self {
        Self {
            script,
            delay: Duration::ZERO,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Suspend each lookup for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl AssetLookup for MockAssets {
    async fn asset_metadata(
        &self,
        _contract: &ContractAddress,
        token: &TokenId,
    ) -> Result<AssetMetadata, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.script {
            AssetScript::Found => Ok(AssetMetadata {
                image_url: Some(mock_image_url(token)),
            }),
            AssetScript::Missing => Ok(AssetMetadata::default()),
            AssetScript::Fail => Err(LookupError::Status { status: 500 }),
        }
    }
}

enum PointsScript {
    Fixed(u64),
    Fail,
}

/// Scripted [`PointsChannel`] that counts invocations.
pub struct MockPoints {
    script: PointsScript,
    calls: Arc<AtomicUsize>,
}

impl MockPoints {
    pub fn fixed(points: u64) -> Self {
        Self {
            script: PointsScript::Fixed(points),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            script: PointsScript::Fail,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl PointsChannel for MockPoints {
    async fn points(
        &self,
        _token: &TokenId,
        _collection: CollectionKind,
    ) -> Result<u64, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script {
            PointsScript::Fixed(points) => Ok(points),
            PointsScript::Fail => Err(LookupError::Status { status: 500 }),
        }
    }
}
