#[cfg(test)]
mod tests {
    use std::time::Duration;

    use queue::broker::{AckMode, Broker};
    use queue::connect::{RetryPolicy, connect_with_retry};

    #[tokio::test]
    async fn test_fifo_delivery() {
        let broker = Broker::new();
        let publisher = broker.declare("transactions");
        let consumer = broker.declare("transactions");

        publisher.publish(b"first".to_vec());
        publisher.publish(b"second".to_vec());

        let a = consumer.consume(AckMode::FireAndForget).await;
        let b = consumer.consume(AckMode::FireAndForget).await;

        assert_eq!(a.payload(), b"first");
        assert_eq!(b.payload(), b"second");
        assert!(consumer.is_empty());
    }

    #[tokio::test]
    async fn test_unacked_delivery_returns_to_the_front() {
        let broker = Broker::new();
        let queue = broker.declare("transactions");

        queue.publish(b"first".to_vec());
        queue.publish(b"second".to_vec());

        {
            let delivery = queue.consume(AckMode::AfterProcess).await;
            assert_eq!(delivery.payload(), b"first");
            // dropped without ack
        }
        assert_eq!(queue.len(), 2);

        let redelivered = queue.consume(AckMode::AfterProcess).await;
        assert_eq!(redelivered.payload(), b"first");
        redelivered.ack();
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn test_fire_and_forget_removes_on_receipt() {
        let broker = Broker::new();
        let queue = broker.declare("transactions");

        queue.publish(b"only".to_vec());

        {
            let delivery = queue.consume(AckMode::FireAndForget).await;
            assert_eq!(delivery.payload(), b"only");
            // dropped without ack on purpose
        }
        assert!(queue.is_empty());
    }

    #[tokio::test]
    async fn test_consume_wakes_on_publish() {
        let broker = Broker::new();
        let queue = broker.declare("transactions");
        let consumer = queue.clone();

        let handle = tokio::spawn(async move {
            let delivery = consumer.consume(AckMode::FireAndForget).await;
            delivery.payload().to_vec()
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        queue.publish(b"late".to_vec());

        assert_eq!(handle.await.unwrap(), b"late");
    }

    #[tokio::test]
    async fn test_connect_with_retry_reports_exhaustion() {
        let policy = RetryPolicy { max_attempts: 3, delay: Duration::from_millis(1) };

        let failed = connect_with_retry(&policy, || async {
            Err::<(), std::io::Error>(std::io::Error::other("unreachable"))
        })
        .await
        .unwrap_err();

        assert_eq!(failed.attempts, 3);

        let mut attempts = 0;
        let connected = connect_with_retry(&policy, || {
            attempts += 1;
            let ready = attempts >= 2;
            async move {
                if ready { Ok(42u32) } else { Err(std::io::Error::other("not yet")) }
            }
        })
        .await
        .unwrap();

        assert_eq!(connected, 42);
    }
}
