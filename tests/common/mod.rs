#![allow(dead_code)]

use async_trait::async_trait;
use postdeck::{
    client::{self, PostsApi, Reply},
    identity::MemoryStore,
    model::{Post, PostBody, SessionIdentity},
    PostdeckContext, ScreenController, StoredIdentity,
};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::oneshot;

pub type TestController = ScreenController<PostdeckContext<FakeApi, StoredIdentity<MemoryStore>>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List,
    Create {
        token: Option<String>,
        body: PostBody,
    },
    Update {
        token: Option<String>,
        id: i64,
        body: PostBody,
    },
    Delete {
        token: Option<String>,
        id: i64,
    },
}

impl Call {
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Call::List)
    }
}

/// An in-memory posts service. Mutations wait on queued gates, in call order, before they apply.
#[derive(Default)]
pub struct FakeApi {
    pub posts: Mutex<Vec<Post>>,
    pub calls: Mutex<Vec<Call>>,
    pub gates: Mutex<VecDeque<oneshot::Receiver<()>>>,
    pub fail_list: Mutex<bool>,
}

impl FakeApi {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: Mutex::new(posts),
            ..Default::default()
        }
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutation).collect()
    }

    pub fn gate(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn wait_for_gate(&self) {
        let gate = self.gates.lock().unwrap().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }
}

#[async_trait]
impl PostsApi for FakeApi {
    async fn list_posts(&self) -> Result<Vec<Post>, client::Error> {
        self.record(Call::List);
        if *self.fail_list.lock().unwrap() {
            return Err(client::Error::Status {
                url: "http://fake/posts".to_string(),
                status: 500,
            });
        }

        Ok(self.posts())
    }

    async fn create_post(
        &self,
        token: Option<&str>,
        body: &PostBody,
    ) -> Result<Reply, client::Error> {
        self.record(Call::Create {
            token: token.map(str::to_string),
            body: body.clone(),
        });
        self.wait_for_gate().await;

        let mut posts = self.posts.lock().unwrap();
        let id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;
        let post = Post {
            id,
            title: body.title.clone(),
            content: body.content.clone(),
            author: format!("author {}", body.author_id),
        };
        posts.push(post.clone());

        Ok(Reply {
            status: 201,
            body: serde_json::to_value(post).unwrap(),
        })
    }

    async fn update_post(
        &self,
        token: Option<&str>,
        id: i64,
        body: &PostBody,
    ) -> Result<Reply, client::Error> {
        self.record(Call::Update {
            token: token.map(str::to_string),
            id,
            body: body.clone(),
        });
        self.wait_for_gate().await;

        let mut posts = self.posts.lock().unwrap();
        match posts.iter_mut().find(|post| post.id == id) {
            Some(post) => {
                post.title = body.title.clone();
                post.content = body.content.clone();
                Ok(Reply {
                    status: 200,
                    body: json!({ "message": "Post updated" }),
                })
            }
            None => Ok(Reply {
                status: 404,
                body: json!({ "message": "Post not found" }),
            }),
        }
    }

    async fn delete_post(&self, token: Option<&str>, id: i64) -> Result<Reply, client::Error> {
        self.record(Call::Delete {
            token: token.map(str::to_string),
            id,
        });
        self.wait_for_gate().await;

        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|post| post.id != id);

        if posts.len() < before {
            Ok(Reply {
                status: 200,
                body: json!({ "message": "Post deleted" }),
            })
        } else {
            Ok(Reply {
                status: 404,
                body: json!({ "message": "Post not found" }),
            })
        }
    }
}

pub fn session() -> SessionIdentity {
    SessionIdentity {
        auth_token: "secret-token".to_string(),
        author_id: 42,
        author_name: "Ada".to_string(),
    }
}

pub async fn logged_in_identity() -> StoredIdentity<MemoryStore> {
    let identity = StoredIdentity::new(MemoryStore::default());
    identity.save(&session()).await.unwrap();
    identity
}

pub fn posts(count: i64) -> Vec<Post> {
    (1..=count)
        .map(|id| Post {
            id,
            ..Post::fake()
        })
        .collect()
}

pub async fn controller(api: FakeApi) -> TestController {
    ScreenController::new(PostdeckContext::new(api, logged_in_identity().await))
}

/// Yields until `done` holds, failing the test after a second.
pub async fn wait_until(mut done: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(1), async {
        while !done() {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("condition should become true");
}
