use std::{ops::Deref, time::Duration};

use reqwest::{Client, ClientBuilder};

use crate::DashiResult;

const USER_AGENT: &str = concat!("dashi/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(builder: ClientBuilder) -> DashiResult<Self> {
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub fn with_timeout(timeout: Duration) -> DashiResult<Self> {
        Self::new(Client::builder().user_agent(USER_AGENT).timeout(timeout))
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}
