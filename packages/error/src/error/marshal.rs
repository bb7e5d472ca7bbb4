//! Structured log encoding

use super::types::ChainedError;
use brick_common::{Detail, EncodeError, ObjectEncoder, ObjectMarshaler};

impl ObjectMarshaler for ChainedError {
    fn marshal_log_object(&self, enc: &mut dyn ObjectEncoder) -> Result<(), EncodeError> {
        let status = self.status();
        enc.add_int("code", i64::from(status.code().to_int()));
        enc.add_string("reason", status.reason());

        match status.detail() {
            Some(Detail::Object(obj)) => enc.add_object("detail", obj.as_ref())?,
            Some(Detail::Reflected(value)) => enc.add_reflected("detail", value)?,
            None => {}
        }

        let Some(cause) = self.cause() else {
            return Ok(());
        };
        match cause.downcast_ref::<ChainedError>() {
            Some(next) => enc.add_object("next", next),
            None => {
                enc.add_string("next", &cause.to_string());
                Ok(())
            }
        }
    }
}
