//! 引用解析器
//!
//! 每个解析器都显式接收数据库句柄（连接或事务），返回解析后的行，
//! 可以在任意 `ConnectionTrait` 上重复调用。

pub mod department;
pub mod lookup;
pub mod room;
pub mod teacher;

use crate::errors::Result;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel,
};

/// 将 `desired` 写回数据库；与现有行完全一致时不产生写操作
pub(crate) async fn save_if_changed<E, A, C>(
    conn: &C,
    existing: E::Model,
    desired: E::Model,
) -> Result<E::Model>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<A> + PartialEq,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
    C: ConnectionTrait,
{
    if existing == desired {
        return Ok(existing);
    }

    let model = desired.into_active_model().reset_all().update(conn).await?;
    Ok(model)
}
