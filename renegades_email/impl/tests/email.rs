use base64::prelude::{Engine, BASE64_STANDARD};
use renegades_email_contracts::{Attachment, Email, EmailService};
use renegades_email_impl::{EmailServiceConfig, EmailServiceImpl};
use renegades_extern_impl::http::HttpClient;
use renegades_testing::email::{SentEmail, REJECTED_RECIPIENT};
use url::Url;

const API_KEY: &str = "test-api-key";
const FROM: &str = "info@nuernberg-renegades.de";

#[tokio::test]
async fn send_email() {
    let client = setup(API_KEY).await;

    let result = client
        .email
        .send(Email {
            recipient: "test@example.com".parse().unwrap(),
            subject: "The Subject".into(),
            html: "<h1>Hello World!</h1>".into(),
            attachment: None,
        })
        .await
        .unwrap();
    assert!(result);

    let mail = client.fetch_mail().await;
    assert_eq!(mail.from, FROM);
    assert_eq!(mail.to, "test@example.com");
    assert_eq!(mail.subject, "The Subject");
    assert_eq!(mail.html, "<h1>Hello World!</h1>");
    assert_eq!(mail.attachments, []);
}

#[tokio::test]
async fn send_email_with_attachment() {
    let client = setup(API_KEY).await;

    let result = client
        .email
        .send(Email {
            recipient: "test@example.com".parse().unwrap(),
            subject: "The Subject".into(),
            html: "<p>PDF is attached.</p>".into(),
            attachment: Some(Attachment {
                filename: "membership-application-Mustermann-Max.pdf".into(),
                content: b"%PDF-1.7 not really".to_vec(),
                content_type: "application/pdf".into(),
            }),
        })
        .await
        .unwrap();
    assert!(result);

    let mail = client.fetch_mail().await;
    assert_eq!(mail.attachments.len(), 1);
    let attachment = &mail.attachments[0];
    assert_eq!(attachment.filename, "membership-application-Mustermann-Max.pdf");
    assert_eq!(attachment.content_type, "application/pdf");
    assert_eq!(
        BASE64_STANDARD.decode(&attachment.content).unwrap(),
        b"%PDF-1.7 not really"
    );
}

#[tokio::test]
async fn unauthorized() {
    let client = setup("wrong-api-key").await;

    let result = client
        .email
        .send(Email {
            recipient: "test@example.com".parse().unwrap(),
            subject: "The Subject".into(),
            html: "<h1>Hello World!</h1>".into(),
            attachment: None,
        })
        .await
        .unwrap();
    assert!(!result);

    assert_eq!(client.fetch_mailbox().await, []);
}

#[tokio::test]
async fn recipient_rejected() {
    let client = setup(API_KEY).await;

    let result = client
        .email
        .send(Email {
            recipient: REJECTED_RECIPIENT.parse().unwrap(),
            subject: "The Subject".into(),
            html: "<h1>Hello World!</h1>".into(),
            attachment: None,
        })
        .await
        .unwrap();
    assert!(!result);

    assert_eq!(client.fetch_mailbox().await, []);
}

struct TestClient {
    email: EmailServiceImpl,
    http: HttpClient,
    endpoint: Url,
}

impl TestClient {
    async fn fetch_mail(&self) -> SentEmail {
        let mut mailbox = self.fetch_mailbox().await;
        assert_eq!(mailbox.len(), 1);
        mailbox.pop().unwrap()
    }

    async fn fetch_mailbox(&self) -> Vec<SentEmail> {
        self.http
            .get(self.endpoint.clone())
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

async fn setup(api_key: &str) -> TestClient {
    let addr = renegades_testing::spawn_server(renegades_testing::email::router(API_KEY.into()))
        .await
        .unwrap();
    let endpoint: Url = format!("http://{addr}/emails").parse().unwrap();

    let http = HttpClient::default();
    let config = EmailServiceConfig::new(api_key, FROM.parse().unwrap(), Some(endpoint.clone()));
    let email = EmailServiceImpl::new(config, http.clone());

    TestClient {
        email,
        http,
        endpoint,
    }
}
