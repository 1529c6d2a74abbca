//! A minimal survey service that runs in-process for the duration of a test.

use http_body_util::{BodyExt, Full};
use hyper::{
    body::{Bytes, Incoming},
    server::conn::http1,
    service::service_fn,
    Request, Response, StatusCode,
};
use hyper_util::rt::TokioIo;
use model::{Ack, Choice, OptionId, OptionResult, Question, QuestionId, Survey, SurveyId, SurveyResult, Vote};
use serde_json::Value;
use std::{
    collections::HashSet,
    convert::Infallible,
    net::{Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

#[derive(Default)]
pub struct State {
    /// Number of requests received so far.
    pub requests: usize,
    /// Question texts whose creation is rejected with a server error.
    pub rejected: HashSet<String>,
    /// Reply to every request with a body that is not JSON.
    pub garbled: bool,
    next_id: i64,
    surveys: Vec<Survey>,
    questions: Vec<(QuestionId, Question)>,
    options: Vec<Choice>,
}

pub struct Server {
    pub addr: SocketAddr,
    pub state: Arc<Mutex<State>>,
}

impl Server {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::<Mutex<State>>::default();

        let shared = state.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let outer = shared.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |req| {
                        let inner = outer.clone();
                        async move { Ok::<_, Infallible>(respond(&inner, req).await) }
                    });
                    // Clients may hang up at any point.
                    let _ = http1::Builder::new().serve_connection(TokioIo::new(stream), service).await;
                });
            }
        });

        Self { addr, state }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> usize {
        self.state.lock().unwrap().requests
    }
}

fn reply(status: StatusCode, body: Vec<u8>) -> Response<Full<Bytes>> {
    let mut res = Response::new(Full::new(Bytes::from(body)));
    *res.status_mut() = status;
    res
}

fn json<T: serde::Serialize>(value: &T) -> Response<Full<Bytes>> {
    reply(StatusCode::OK, serde_json::to_vec(value).unwrap())
}

fn ack(message: &str) -> Ack {
    Ack { message: String::from(message), survey: None, question: None, option: None }
}

async fn respond(state: &Mutex<State>, req: Request<Incoming>) -> Response<Full<Bytes>> {
    let method = req.method().clone();
    let path = String::from(req.uri().path());
    let Ok(body) = req.into_body().collect().await else {
        return reply(StatusCode::BAD_REQUEST, Vec::new());
    };
    let body = body.to_bytes();

    let mut state = state.lock().unwrap();
    state.requests += 1;
    if state.garbled {
        return reply(StatusCode::OK, b"<html>oops</html>".to_vec());
    }

    match (method.as_str(), path.as_str()) {
        ("POST", "/add_survey") => {
            let Ok(mut survey) = serde_json::from_slice::<Survey>(&body) else {
                return reply(StatusCode::BAD_REQUEST, Vec::new());
            };
            state.next_id += 1;
            let id = SurveyId(state.next_id);
            survey.id = Some(id);
            survey.questions.clear();
            state.surveys.push(survey);
            json(&Ack { survey: Some(id), ..ack("Survey added successfully") })
        }
        ("POST", "/add_question") => {
            let Ok(question) = serde_json::from_slice::<Question>(&body) else {
                return reply(StatusCode::BAD_REQUEST, Vec::new());
            };
            if !state.surveys.iter().any(|survey| survey.id == Some(question.survey)) {
                return reply(StatusCode::NOT_FOUND, Vec::new());
            }
            if state.rejected.contains(&question.text) {
                return reply(StatusCode::INTERNAL_SERVER_ERROR, Vec::new());
            }
            state.next_id += 1;
            let id = QuestionId(state.next_id);
            state.questions.push((id, question));
            json(&Ack { question: Some(id), ..ack("Question added successfully") })
        }
        ("POST", "/add_option") => {
            let Ok(option) = serde_json::from_slice::<Choice>(&body) else {
                return reply(StatusCode::BAD_REQUEST, Vec::new());
            };
            if !state.questions.iter().any(|&(id, _)| id == option.question) {
                return reply(StatusCode::NOT_FOUND, Vec::new());
            }
            state.next_id += 1;
            let id = OptionId(state.next_id);
            state.options.push(Choice { id: Some(id), votes: 0, ..option });
            json(&Ack { option: Some(id), ..ack("Option added successfully") })
        }
        ("POST", "/vote_option") => {
            let Ok(Vote { option }) = serde_json::from_slice::<Vote>(&body) else {
                return reply(StatusCode::BAD_REQUEST, Vec::new());
            };
            let Some(target) = state.options.iter_mut().find(|choice| choice.id == Some(option)) else {
                return reply(StatusCode::NOT_FOUND, Vec::new());
            };
            target.votes += 1;
            json(&ack("Vote recorded"))
        }
        ("GET", "/read_data") => {
            // Extra fields exercise forward compatibility.
            let surveys: Vec<Value> = state
                .surveys
                .iter()
                .map(|survey| {
                    let mut value = serde_json::to_value(survey).unwrap();
                    value["CreatedBy"] = Value::from("tester");
                    value
                })
                .collect();
            json(&surveys)
        }
        ("GET", path) => {
            if let Some(id) = path.strip_prefix("/read_survey/").and_then(|id| id.parse().ok()) {
                let id = SurveyId(id);
                return match state.surveys.iter().find(|survey| survey.id == Some(id)) {
                    Some(survey) => json(survey),
                    None => reply(StatusCode::NOT_FOUND, Vec::new()),
                };
            }

            if let Some(id) = path.strip_prefix("/survey_results/").and_then(|id| id.parse().ok()) {
                let id = SurveyId(id);
                let results: Vec<_> = state
                    .questions
                    .iter()
                    .filter(|(_, question)| question.survey == id)
                    .map(|&(question, ref draft)| SurveyResult {
                        question,
                        text: draft.text.clone(),
                        options: state
                            .options
                            .iter()
                            .filter(|option| option.question == question)
                            .map(|option| OptionResult {
                                id: option.id.unwrap(),
                                text: option.text.clone(),
                                votes: option.votes,
                            })
                            .collect(),
                    })
                    .collect();
                return json(&results);
            }

            reply(StatusCode::NOT_FOUND, Vec::new())
        }
        _ => reply(StatusCode::NOT_FOUND, Vec::new()),
    }
}
