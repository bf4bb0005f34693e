// Chunked notification streaming - Length-prefixed JSON frames per instance
use crate::domain::notification::Notification;
use crate::infrastructure::http_response::brotli_compress;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use tokio::sync::broadcast::{self, error::RecvError};

/// Create a chunked streaming response from a stream of notifications
pub async fn chunked_json_stream<S>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = Notification> + Send + 'static,
{
    let byte_stream = stream.then(move |msg| async move { serialize_frame(msg, compress).await });

    let body = Body::from_stream(byte_stream);

    // Frames are compressed individually, so no Content-Encoding on the response
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(header::TRANSFER_ENCODING, "chunked")
        .body(body)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Serialize one notification envelope into a frame
async fn serialize_frame(msg: Notification, compress: bool) -> Result<Bytes, std::io::Error> {
    // 1. JSON envelope
    let json = serde_json::to_vec(&msg.to_envelope())?;

    // 2. Optionally compress
    let payload = if compress {
        brotli_compress(json).await?
    } else {
        json
    };

    // 3. Prepend length (4 bytes, big-endian)
    let length = payload.len() as u32;
    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(length);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

/// Notifications for one instance, until the channel closes
pub fn instance_notifications(
    mut rx: broadcast::Receiver<Notification>,
    unique_id: String,
) -> impl Stream<Item = Notification> + Send + 'static {
    async_stream::stream! {
        loop {
            match rx.recv().await {
                Ok(msg) if msg.unique_id() == unique_id => yield msg,
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "Notification stream for {} lagged, skipped {} notifications across all instances",
                        unique_id,
                        skipped
                    );
                }
                Err(RecvError::Closed) => break,
            }
        }
    }
}

/// Helper to create a streaming response from a broadcast receiver
pub async fn stream_from_receiver(
    rx: broadcast::Receiver<Notification>,
    unique_id: String,
    compress: bool,
) -> impl IntoResponse {
    tracing::info!("Streaming notifications for {}", unique_id);
    let stream = instance_notifications(rx, unique_id);

    match chunked_json_stream(stream, compress).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::notifier::Notifier;
    use bytes::Buf;

    #[tokio::test]
    async fn test_instance_stream_filters_by_id() {
        let notifier = Notifier::new(16);
        let stream = instance_notifications(notifier.subscribe(), "w1".to_string());

        notifier.send(Notification::FetchStart {
            unique_id: "w2".to_string(),
        });
        notifier.send(Notification::FetchStart {
            unique_id: "w1".to_string(),
        });
        notifier.send(Notification::AllDataReceived {
            unique_id: "w1".to_string(),
        });

        let received: Vec<Notification> = stream.take(2).collect().await;
        assert_eq!(received.len(), 2);
        assert!(received.iter().all(|n| n.unique_id() == "w1"));
        assert_eq!(received[1].name(), "ALL-DATA-RECEIVED");
    }

    #[tokio::test]
    async fn test_stream_survives_lag_from_other_instances() {
        let notifier = Notifier::new(2);
        let stream = instance_notifications(notifier.subscribe(), "w1".to_string());

        notifier.send(Notification::FetchStart {
            unique_id: "w1".to_string(),
        });
        for _ in 0..5 {
            notifier.send(Notification::FetchStart {
                unique_id: "w2".to_string(),
            });
        }
        notifier.send(Notification::AllDataReceived {
            unique_id: "w1".to_string(),
        });

        // The early w1 frame fell out of the shared ring; the stream resumes after it
        let received: Vec<Notification> = stream.take(1).collect().await;
        assert_eq!(received[0].name(), "ALL-DATA-RECEIVED");
        assert_eq!(received[0].unique_id(), "w1");
    }

    #[tokio::test]
    async fn test_frame_is_length_prefixed_json() {
        let msg = Notification::AllDataReceived {
            unique_id: "w1".to_string(),
        };
        let mut frame = serialize_frame(msg, false).await.unwrap();

        let length = frame.get_u32() as usize;
        assert_eq!(length, frame.len());
        let envelope: serde_json::Value = serde_json::from_slice(&frame).unwrap();
        assert_eq!(envelope["notification"], "ALL-DATA-RECEIVED");
        assert_eq!(envelope["payload"]["uniqueID"], "w1");
    }
}
