//! Test spec skeletons
//!
//! Rendered by minijinja with `trim_blocks` and `lstrip_blocks`, so block tags
//! on their own line leave nothing behind.

/// ScalaTest `fixture.FlatSpec` with `AutoRollback`
pub const FLAT_SPEC: &str = r##"package {{ package }}

import org.scalatest._
import scalikejdbc.scalatest.AutoRollback
import scalikejdbc._
{% for line in imports %}
{{ line }}
{% endfor %}


class {{ class_name }}Spec extends fixture.FlatSpec with Matchers with AutoRollback {
{% if syntax_object %}
  {{ syntax_object }}
{% endif %}

  behavior of "{{ class_name }}"

  it should "find by primary keys" in { implicit session =>
    val maybeFound = {{ open }}{{ class_name }}.find({{ primary_keys }}){{ close }}
    maybeFound.isDefined should be(true)
  }
  it should "find by where clauses" in { implicit session =>
    val maybeFound = {{ open }}{{ class_name }}.findBy({{ where_example }}){{ close }}
    maybeFound.isDefined should be(true)
  }
  it should "find all records" in { implicit session =>
    val allResults = {{ open }}{{ class_name }}.findAll{{ collection_arg }}(){{ close }}
    allResults.size should be >(0)
  }
  it should "count all records" in { implicit session =>
    val count = {{ open }}{{ class_name }}.countAll(){{ close }}
    count should be >(0L)
  }
  it should "find all by where clauses" in { implicit session =>
    val results = {{ open }}{{ class_name }}.findAllBy{{ collection_arg }}({{ where_example }}){{ close }}
    results.size should be >(0)
  }
  it should "count by where clauses" in { implicit session =>
    val count = {{ open }}{{ class_name }}.countBy({{ where_example }}){{ close }}
    count should be >(0L)
  }
  it should "create new record" in { implicit session =>
    val created = {{ open }}{{ class_name }}.create({{ create_fields }}){{ close }}
    created should not be(null)
  }
  it should "save a record" in { implicit session =>
    val entity = {{ open }}{{ class_name }}.findAll{{ collection_arg }}(){{ close }}.head
    val updated = {{ open }}{{ class_name }}.save(entity){{ close }}
    updated should not be(null)
  }
  it should "destroy a record" in { implicit session =>
    val entity = {{ open }}{{ class_name }}.findAll{{ collection_arg }}(){{ close }}.head
    val deleted = {{ open }}{{ class_name }}.destroy(entity){{ close }}
    deleted should be(1)
  }
}
"##;

/// specs2 unit specification with one `AutoRollback` scope per example
pub const UNIT_SPEC: &str = r##"package {{ package }}

import scalikejdbc.specs2.mutable.AutoRollback
import org.specs2.mutable._
import scalikejdbc._
{% for line in imports %}
{{ line }}
{% endfor %}


class {{ class_name }}Spec extends Specification {

  "{{ class_name }}" should {

{% if syntax_object %}
    {{ syntax_object }}

{% endif %}
    "find by primary keys" in new AutoRollback {
      val maybeFound = {{ open }}{{ class_name }}.find({{ primary_keys }}){{ close }}
      maybeFound.isDefined should beTrue
    }
    "find by where clauses" in new AutoRollback {
      val maybeFound = {{ open }}{{ class_name }}.findBy({{ where_example }}){{ close }}
      maybeFound.isDefined should beTrue
    }
    "find all records" in new AutoRollback {
      val allResults = {{ open }}{{ class_name }}.findAll{{ collection_arg }}(){{ close }}
      allResults.size should be_>(0)
    }
    "count all records" in new AutoRollback {
      val count = {{ open }}{{ class_name }}.countAll(){{ close }}
      count should be_>(0L)
    }
    "find all by where clauses" in new AutoRollback {
      val results = {{ open }}{{ class_name }}.findAllBy{{ collection_arg }}({{ where_example }}){{ close }}
      results.size should be_>(0)
    }
    "count by where clauses" in new AutoRollback {
      val count = {{ open }}{{ class_name }}.countBy({{ where_example }}){{ close }}
      count should be_>(0L)
    }
    "create new record" in new AutoRollback {
      val created = {{ open }}{{ class_name }}.create({{ create_fields }}){{ close }}
      created should not(beNull)
    }
    "save a record" in new AutoRollback {
      val entity = {{ open }}{{ class_name }}.findAll{{ collection_arg }}(){{ close }}.head
      val updated = {{ open }}{{ class_name }}.save(entity){{ close }}
      updated should not(beNull)
    }
    "destroy a record" in new AutoRollback {
      val entity = {{ open }}{{ class_name }}.findAll{{ collection_arg }}(){{ close }}.head
      val deleted = {{ open }}{{ class_name }}.destroy(entity){{ close }}
      deleted should be_==(1)
    }
  }

}
"##;

/// specs2 acceptance specification composing example fragments
pub const ACCEPTANCE_SPEC: &str = r##"package {{ package }}

import scalikejdbc.specs2.AutoRollback
import org.specs2._
import scalikejdbc._
{% for line in imports %}
{{ line }}
{% endfor %}


class {{ class_name }}Spec extends Specification { def is =

  "The '{{ class_name }}' model should" ^
    "find by primary keys" ! autoRollback().findByPrimaryKeys ^
    "find by where clauses" ! autoRollback().findBy ^
    "find all records" ! autoRollback().findAll ^
    "count all records" ! autoRollback().countAll ^
    "find all by where clauses" ! autoRollback().findAllBy ^
    "count by where clauses" ! autoRollback().countBy ^
    "create new record" ! autoRollback().create ^
    "save a record" ! autoRollback().save ^
    "destroy a record" ! autoRollback().destroy ^
    end

  case class autoRollback() extends AutoRollback {
{% if syntax_object %}
    {{ syntax_object }}

{% endif %}
    def findByPrimaryKeys = this {
      val maybeFound = {{ open }}{{ class_name }}.find({{ primary_keys }}){{ close }}
      maybeFound.isDefined should beTrue
    }
    def findBy = this {
      val maybeFound = {{ open }}{{ class_name }}.findBy({{ where_example }}){{ close }}
      maybeFound.isDefined should beTrue
    }
    def findAll = this {
      val allResults = {{ open }}{{ class_name }}.findAll{{ collection_arg }}(){{ close }}
      allResults.size should be_>(0)
    }
    def countAll = this {
      val count = {{ open }}{{ class_name }}.countAll(){{ close }}
      count should be_>(0L)
    }
    def findAllBy = this {
      val results = {{ open }}{{ class_name }}.findAllBy{{ collection_arg }}({{ where_example }}){{ close }}
      results.size should be_>(0)
    }
    def countBy = this {
      val count = {{ open }}{{ class_name }}.countBy({{ where_example }}){{ close }}
      count should be_>(0L)
    }
    def create = this {
      val created = {{ open }}{{ class_name }}.create({{ create_fields }}){{ close }}
      created should not(beNull)
    }
    def save = this {
      val entity = {{ open }}{{ class_name }}.findAll{{ collection_arg }}(){{ close }}.head
      val updated = {{ open }}{{ class_name }}.save(entity){{ close }}
      updated should not(beNull)
    }
    def destroy = this {
      val entity = {{ open }}{{ class_name }}.findAll{{ collection_arg }}(){{ close }}.head
      val deleted = {{ open }}{{ class_name }}.destroy(entity){{ close }}
      deleted should be_==(1)
    }
  }

}
"##;
