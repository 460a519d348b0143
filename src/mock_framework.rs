//! # Mock Framework
//!
//! Utilities for testing the session client in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_add_product`] or [`expect_snapshot`] to
//! assert behavior.

use tokio::sync::mpsc;

use crate::clients::SessionClient;
use crate::error::SessionError;
use crate::messages::{ServiceResponse, SessionRequest};
use crate::session::SessionSnapshot;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests we don't want to spin up a full `SessionService` if we are
/// just testing the *client* side of the protocol.
///
/// Instead, we create a "Mock Client". This client sends messages to a channel
/// we control (`receiver`). We can then inspect the messages arriving on that
/// channel, assert they are correct, and answer them however the test needs
/// (success, failure, canned snapshots) deterministically.
pub fn create_mock_client(buffer_size: usize) -> (SessionClient, mpsc::Receiver<SessionRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Helper to verify that the next message is an AddProduct request
pub async fn expect_add_product(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<(u32, ServiceResponse<(), SessionError>)> {
    match receiver.recv().await {
        Some(SessionRequest::AddProduct {
            product_id,
            respond_to,
        }) => Some((product_id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot(
    receiver: &mut mpsc::Receiver<SessionRequest>,
) -> Option<ServiceResponse<SessionSnapshot, SessionError>> {
    match receiver.recv().await {
        Some(SessionRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move { client.add_product(3).await });

        let (product_id, responder) = expect_add_product(&mut receiver)
            .await
            .expect("Expected AddProduct request");
        assert_eq!(product_id, 3);
        responder.send(Ok(())).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_mock_snapshot() {
        let (client, mut receiver) = create_mock_client(10);

        let snapshot_task = tokio::spawn(async move { client.snapshot().await });

        let responder = expect_snapshot(&mut receiver)
            .await
            .expect("Expected Snapshot request");
        responder.send(Ok(SessionSnapshot::default())).unwrap();

        let snapshot = snapshot_task.await.unwrap().unwrap();
        assert!(snapshot.lines.is_empty());
        assert_eq!(snapshot.total, 0.0);
    }

    #[tokio::test]
    async fn dropped_receiver_surfaces_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let result = client.add_product(1).await;
        assert_eq!(
            result,
            Err(SessionError::ActorCommunicationError(
                "Actor closed".to_string()
            ))
        );
    }
}
