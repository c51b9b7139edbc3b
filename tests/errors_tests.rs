use std::error::Error;

use pingrelay::errors::{DeliveryError, NotifyError, PartLabel, TransportError};

#[test]
fn test_errors_implement_error_trait() {
    fn assert_error<T: Error + Send + Sync + 'static>(_: &T) {}

    assert_error(&DeliveryError::EmptyMessage);
    assert_error(&TransportError::Api("test error".to_string()));
    assert_error(&NotifyError::Unauthorized);
}

#[test]
fn test_delivery_error_display() {
    assert_eq!(DeliveryError::EmptyMessage.to_string(), "Message is empty");

    let error = DeliveryError::ChunkTooLarge {
        part: 3,
        total: 4,
        length: 4120,
        limit: 4096,
    };
    assert_eq!(
        error.to_string(),
        "Part 3/4 is too large (4120 > 4096 characters)"
    );

    let error = DeliveryError::Transport {
        part: Some(PartLabel { part: 2, total: 3 }),
        reason: "Telegram API error: Forbidden: bot was blocked by the user".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Failed to send part 2/3: Telegram API error: Forbidden: bot was blocked by the user"
    );

    let error = DeliveryError::Transport {
        part: None,
        reason: "Failed to send HTTP request: timed out".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Failed to send message: Failed to send HTTP request: timed out"
    );
}

#[test]
fn test_notify_error_status_codes() {
    assert_eq!(NotifyError::ParseError("bad".to_string()).status_code(), 400);
    assert_eq!(
        NotifyError::PayloadTooLarge {
            length: 60_000,
            limit: 50_000
        }
        .status_code(),
        413
    );
    assert_eq!(NotifyError::Unauthorized.status_code(), 401);
    assert_eq!(NotifyError::from(DeliveryError::EmptyMessage).status_code(), 400);
    assert_eq!(
        NotifyError::from(DeliveryError::ChunkTooLarge {
            part: 1,
            total: 2,
            length: 10,
            limit: 5
        })
        .status_code(),
        500
    );
    assert_eq!(
        NotifyError::from(DeliveryError::Transport {
            part: None,
            reason: "down".to_string()
        })
        .status_code(),
        502
    );
}

#[test]
fn test_notify_error_from_conversions() {
    let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let notify_err: NotifyError = err.into();

    match notify_err {
        NotifyError::ParseError(msg) => assert!(!msg.is_empty()),
        _ => panic!("Unexpected error type"),
    }

    // Delivery errors keep their own message when wrapped.
    let wrapped = NotifyError::from(DeliveryError::EmptyMessage);
    assert_eq!(wrapped.to_string(), "Message is empty");

    #[allow(unused)]
    #[allow(clippy::items_after_statements)]
    fn _check_reqwest_conversion(err: reqwest::Error) -> TransportError {
        TransportError::from(err)
    }
}
