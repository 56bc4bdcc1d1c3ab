//! 院系解析

use super::save_if_changed;
use crate::entity::departments::{ActiveModel, Column, Entity as Departments, Model};
use crate::errors::Result;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

/// 只见过代码、尚无完整信息的院系使用的占位名称
pub fn placeholder_name(code: &str) -> String {
    format!("未知({code})")
}

async fn find_by_code<C: ConnectionTrait>(conn: &C, code: &str) -> Result<Option<Model>> {
    Ok(Departments::find()
        .filter(Column::Code.eq(code))
        .one(conn)
        .await?)
}

/// 按代码更新或创建院系，字段总是覆盖为最新值
pub async fn resolve_full<C: ConnectionTrait>(
    conn: &C,
    code: &str,
    name_cn: &str,
    name_en: Option<&str>,
    is_college: bool,
) -> Result<Model> {
    match find_by_code(conn, code).await? {
        Some(existing) => {
            let desired = Model {
                name_cn: name_cn.to_string(),
                name_en: name_en.map(str::to_string),
                is_college,
                ..existing.clone()
            };
            save_if_changed::<Departments, _, _>(conn, existing, desired).await
        }
        None => {
            let model = ActiveModel {
                code: Set(code.to_string()),
                name_cn: Set(name_cn.to_string()),
                name_en: Set(name_en.map(str::to_string)),
                is_college: Set(is_college),
                ..Default::default()
            };
            Ok(model.insert(conn).await?)
        }
    }
}

/// 按代码获取院系；不存在时创建占位记录，已有记录原样返回
pub async fn resolve_by_code_only<C: ConnectionTrait>(conn: &C, code: &str) -> Result<Model> {
    if let Some(existing) = find_by_code(conn, code).await? {
        return Ok(existing);
    }

    let model = ActiveModel {
        code: Set(code.to_string()),
        name_cn: Set(placeholder_name(code)),
        name_en: Set(None),
        is_college: Set(false),
        ..Default::default()
    };
    Ok(model.insert(conn).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_name() {
        assert_eq!(placeholder_name("CS01"), "未知(CS01)");
    }
}
