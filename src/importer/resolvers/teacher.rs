//! 教师身份解析
//!
//! 教务数据只在部分接口中给出 `person_id` / `teacher_id`，
//! 教学班列表里只有姓名。解析顺序：
//!
//! 1. `person_id` 命中 → 强匹配
//! 2. `teacher_id` 命中 → 强匹配
//! 3. 同名且两个 ID 都为空的匿名教师 → 弱匹配
//! 4. 以上都未命中 → 新建
//!
//! 命中后姓名总是刷新，新出现的 ID 被写入，已有 ID 不会被清空。
//! 弱匹配无法区分同名的两位匿名教师，会把他们合并为一行。

use super::save_if_changed;
use crate::entity::teachers::{ActiveModel, Column, Entity as Teachers, Model};
use crate::errors::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// 源数据缺少姓名时使用的占位名
pub const UNKNOWN_TEACHER_NAME: &str = "未知教师";

/// 一次解析请求携带的身份信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherIdentity {
    pub person_id: Option<i64>,
    pub teacher_id: Option<i64>,
    pub name: String,
}

impl TeacherIdentity {
    /// 0 视为缺失的 ID；空姓名替换为占位名
    pub fn new(person_id: Option<i64>, teacher_id: Option<i64>, name: Option<&str>) -> Self {
        Self {
            person_id: person_id.filter(|id| *id != 0),
            teacher_id: teacher_id.filter(|id| *id != 0),
            name: name
                .filter(|name| !name.is_empty())
                .unwrap_or(UNKNOWN_TEACHER_NAME)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrongKey {
    PersonId(i64),
    TeacherId(i64),
}

/// 解析决策
#[derive(Debug, Clone, PartialEq)]
pub enum TeacherMatch {
    /// 通过外部 ID 找到
    Strong(StrongKey, Model),
    /// 仅凭姓名找到匿名教师，可能误合并同名者
    Weak(Model),
    New,
}

async fn find_by_strong_key<C: ConnectionTrait>(conn: &C, key: StrongKey) -> Result<Option<Model>> {
    let condition = match key {
        StrongKey::PersonId(id) => Column::PersonId.eq(id),
        StrongKey::TeacherId(id) => Column::TeacherId.eq(id),
    };

    Ok(Teachers::find()
        .filter(condition)
        .order_by_asc(Column::Id)
        .one(conn)
        .await?)
}

/// 按强到弱的顺序查找，返回首个命中
pub async fn decide<C: ConnectionTrait>(conn: &C, identity: &TeacherIdentity) -> Result<TeacherMatch> {
    let strong_keys = [
        identity.person_id.map(StrongKey::PersonId),
        identity.teacher_id.map(StrongKey::TeacherId),
    ];

    for key in strong_keys.into_iter().flatten() {
        if let Some(teacher) = find_by_strong_key(conn, key).await? {
            return Ok(TeacherMatch::Strong(key, teacher));
        }
    }

    let anonymous = Teachers::find()
        .filter(Column::NameCn.eq(&identity.name))
        .filter(Column::PersonId.is_null())
        .filter(Column::TeacherId.is_null())
        .order_by_asc(Column::Id)
        .one(conn)
        .await?;

    Ok(match anonymous {
        Some(teacher) => TeacherMatch::Weak(teacher),
        None => TeacherMatch::New,
    })
}

/// 把新身份合并进已有行：刷新姓名，只写入非空 ID
pub fn merge_identity(existing: &Model, identity: &TeacherIdentity) -> Model {
    Model {
        person_id: identity.person_id.or(existing.person_id),
        teacher_id: identity.teacher_id.or(existing.teacher_id),
        name_cn: identity.name.clone(),
        ..existing.clone()
    }
}

/// 解析并落库，返回教师行
pub async fn resolve<C: ConnectionTrait>(conn: &C, identity: &TeacherIdentity) -> Result<Model> {
    match decide(conn, identity).await? {
        TeacherMatch::Strong(_, existing) | TeacherMatch::Weak(existing) => {
            let desired = merge_identity(&existing, identity);
            save_if_changed::<Teachers, _, _>(conn, existing, desired).await
        }
        TeacherMatch::New => {
            let model = ActiveModel {
                person_id: Set(identity.person_id),
                teacher_id: Set(identity.teacher_id),
                name_cn: Set(identity.name.clone()),
                name_en: Set(None),
                department_id: Set(None),
                ..Default::default()
            };
            Ok(model.insert(conn).await?)
        }
    }
}

/// 教学班列表阶段的教师：按（中文名, 英文名, 院系）三元组获取或创建
///
/// 此时还没有外部 ID，空值也参与匹配。
pub async fn get_or_create_by_assignment<C: ConnectionTrait>(
    conn: &C,
    name_cn: &str,
    name_en: Option<&str>,
    department_id: Option<i64>,
) -> Result<Model> {
    let mut query = Teachers::find().filter(Column::NameCn.eq(name_cn));
    query = match name_en {
        Some(name_en) => query.filter(Column::NameEn.eq(name_en)),
        None => query.filter(Column::NameEn.is_null()),
    };
    query = match department_id {
        Some(department_id) => query.filter(Column::DepartmentId.eq(department_id)),
        None => query.filter(Column::DepartmentId.is_null()),
    };

    if let Some(existing) = query.order_by_asc(Column::Id).one(conn).await? {
        return Ok(existing);
    }

    let model = ActiveModel {
        person_id: Set(None),
        teacher_id: Set(None),
        name_cn: Set(name_cn.to_string()),
        name_en: Set(name_en.map(str::to_string)),
        department_id: Set(department_id),
        ..Default::default()
    };
    Ok(model.insert(conn).await?)
}

/// 用课表数据中的 ID 回填已关联的教师，缺失的 ID 不会覆盖已有值
pub async fn backfill_ids<C: ConnectionTrait>(
    conn: &C,
    teacher: Model,
    person_id: Option<i64>,
    teacher_id: Option<i64>,
) -> Result<Model> {
    let desired = Model {
        person_id: person_id.filter(|id| *id != 0).or(teacher.person_id),
        teacher_id: teacher_id.filter(|id| *id != 0).or(teacher.teacher_id),
        ..teacher.clone()
    };
    save_if_changed::<Teachers, _, _>(conn, teacher, desired).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(person_id: Option<i64>, teacher_id: Option<i64>, name: &str) -> Model {
        Model {
            id: 7,
            person_id,
            teacher_id,
            name_cn: name.to_string(),
            name_en: Some("San Zhang".to_string()),
            department_id: Some(3),
        }
    }

    #[test]
    fn test_identity_normalization() {
        let identity = TeacherIdentity::new(Some(0), Some(55), Some(""));
        assert_eq!(identity.person_id, None);
        assert_eq!(identity.teacher_id, Some(55));
        assert_eq!(identity.name, UNKNOWN_TEACHER_NAME);

        let identity = TeacherIdentity::new(None, None, None);
        assert_eq!(identity.name, "未知教师");
    }

    #[test]
    fn test_merge_promotes_anonymous_teacher() {
        let existing = teacher(None, None, "张三");
        let identity = TeacherIdentity::new(Some(123), None, Some("张三"));

        let merged = merge_identity(&existing, &identity);
        assert_eq!(merged.id, existing.id);
        assert_eq!(merged.person_id, Some(123));
        assert_eq!(merged.teacher_id, None);
        assert_eq!(merged.department_id, Some(3));
    }

    #[test]
    fn test_merge_never_clears_ids() {
        let existing = teacher(Some(9), Some(55), "张三");
        let identity = TeacherIdentity::new(None, None, Some("张三丰"));

        let merged = merge_identity(&existing, &identity);
        assert_eq!(merged.person_id, Some(9));
        assert_eq!(merged.teacher_id, Some(55));
        assert_eq!(merged.name_cn, "张三丰");
    }

    #[test]
    fn test_is_anonymous() {
        assert!(teacher(None, None, "张三").is_anonymous());
        assert!(!teacher(None, Some(1), "张三").is_anonymous());
    }
}
