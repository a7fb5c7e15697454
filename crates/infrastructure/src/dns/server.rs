use crate::dns::record_type_map::RecordTypeMapper;
use crate::dns::wire_record;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use quartz_dns_application::ResolveQueryUseCase;
use quartz_dns_domain::{FallbackAnswers, Question};
use std::sync::Arc;
use tracing::{debug, error};

/// Wire-facing request handler. Resolution never fails a query: whatever
/// happens inside the engine, the response is NoError with at least the
/// fallback pair. The only wire error left is an unparseable request
/// envelope.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<ResolveQueryUseCase>,
    fallback: FallbackAnswers,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<ResolveQueryUseCase>, fallback: FallbackAnswers) -> Self {
        Self { use_case, fallback }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        // The original-cased name goes into synthesized answers; the engine
        // does its own normalization for the store lookup.
        let name: Arc<str> = Arc::from(query.original().name().to_utf8().as_str());
        let wire_type = query.query_type();

        debug!(name = %name, record_type = ?wire_type, client = %request.src().ip(), "DNS query received");

        let reply = match RecordTypeMapper::from_wire(wire_type) {
            Some(record_type) => {
                self.use_case
                    .execute(&Question::new(name.clone(), record_type))
                    .await
            }
            None => {
                debug!(record_type = ?wire_type, "Unserved query type, serving fallback");
                self.fallback.reply(&name)
            }
        };

        let mut answers: Vec<Record> = Vec::with_capacity(reply.answers.len());
        for answer in &reply.answers {
            match wire_record::to_record(answer) {
                Some(record) => answers.push(record),
                None => debug!(name = %answer.name, "Skipping answer with unrenderable name"),
            }
        }

        debug!(
            name = %name,
            answers = answers.len(),
            source = ?reply.source,
            "Sending response"
        );

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_authoritative(true);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
