//! What the user asked for on the command line.

/// Immutable description of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchRequest {
    enterprise: bool,
    test_mode: bool,
    web_test_mode: bool,
    drop_db: bool,
    status: bool,
    passthrough_args: Vec<String>,
}

impl LaunchRequest {
    pub fn builder() -> LaunchRequestBuilder {
        LaunchRequestBuilder::default()
    }

    pub fn enterprise_requested(&self) -> bool {
        self.enterprise
    }

    /// Always true in web test mode.
    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn web_test_mode(&self) -> bool {
        self.web_test_mode
    }

    pub fn drop_db_requested(&self) -> bool {
        self.drop_db
    }

    pub fn status_requested(&self) -> bool {
        self.status
    }

    pub fn passthrough_args(&self) -> &[String] {
        &self.passthrough_args
    }
}

#[derive(Debug, Clone, Default)]
pub struct LaunchRequestBuilder {
    inner: LaunchRequest,
}

impl LaunchRequestBuilder {
    pub fn enterprise(mut self, value: bool) -> Self {
        self.inner.enterprise = value;
        self
    }

    pub fn test_mode(mut self, value: bool) -> Self {
        self.inner.test_mode = value;
        self
    }

    pub fn web_test_mode(mut self, value: bool) -> Self {
        self.inner.web_test_mode = value;
        self
    }

    pub fn drop_db(mut self, value: bool) -> Self {
        self.inner.drop_db = value;
        self
    }

    pub fn status(mut self, value: bool) -> Self {
        self.inner.status = value;
        self
    }

    pub fn passthrough_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inner.passthrough_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> LaunchRequest {
        let mut request = self.inner;
        if request.web_test_mode {
            request.test_mode = true;
        }
        request
    }
}
